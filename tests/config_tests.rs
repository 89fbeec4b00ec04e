//! Integration tests for configuration management

use course_planner::config::{Config, ConfigOverrides};
use course_planner::models::{Category, CreditRequirements};
use course_planner::planner::DefaultPlacement;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config location
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.plan_file.is_empty(),
        "Default plan_file should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.planner.final_year, 4);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
plan_file = "./plan.json"
reports_dir = "./reports"

[planner]
final_year = 3

[[requirements]]
category = "Politics"
credits = 10.0

[[requirements]]
category = "required-major"
credits = 20.5
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.plan_file, "./plan.json");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.plan_path(), PathBuf::from("./plan.json"));
    assert_eq!(config.placement(), DefaultPlacement::in_year(3));

    let requirements = config.credit_requirements();
    assert_eq!(requirements.len(), 2);
    assert_eq!(requirements.get(&Category::new("politics")), Some(10.0));
    assert!((requirements.total() - 30.5).abs() < 1e-9);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.planner.final_year, 0);
    assert!(config.requirements.is_empty());

    // Empty settings fall back to built-in behavior
    assert_eq!(config.placement(), DefaultPlacement::default());
    assert_eq!(
        config.credit_requirements(),
        CreditRequirements::program_default()
    );
    assert!(config.plan_path().ends_with("plan.json"));
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$COURSE_PLANNER/test.log"

[paths]
plan_file = "$COURSE_PLANNER/plan.json"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("courseplanner"));
    assert!(!config.logging.file.contains("$COURSE_PLANNER"));
    assert!(config.paths.plan_file.contains("courseplanner"));
    assert!(!config.paths.plan_file.contains("$COURSE_PLANNER"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "maybe").is_err());

    config
        .set("plan-file", "/data/plan.json")
        .expect("Failed to set plan file");
    assert_eq!(config.get("plan_file").unwrap(), "/data/plan.json");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("final_year", "2").expect("Failed to set year");
    config.set("reports_dir", "/x").expect("Failed to set dir");

    config
        .unset("final_year", &defaults)
        .expect("Failed to unset year");
    config
        .unset("reports-dir", &defaults)
        .expect("Failed to unset dir");
    assert_eq!(config.planner.final_year, defaults.planner.final_year);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_load_from_creates_missing_file() {
    let (_temp_dir, config_file) = setup_temp_config();

    let config = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
    let written = fs::read_to_string(&config_file).expect("Failed to read config");
    assert!(written.contains("[[requirements]]"));
}

#[test]
fn test_save_and_load_round_trip() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "error").expect("Failed to set level");
    config.set("final_year", "3").expect("Failed to set year");
    config.save_to(&config_file).expect("Failed to save");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "error");
    assert_eq!(loaded.planner.final_year, 3);
    assert_eq!(loaded.requirements, config.requirements);
}

#[test]
fn test_load_from_merges_new_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").unwrap();

    let config = Config::load_from(&config_file);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.planner.final_year, 4);
    assert_eq!(config.requirements.len(), 6);
    let rewritten = fs::read_to_string(&config_file).unwrap();
    assert!(rewritten.contains("final_year = 4"));
}

#[test]
fn test_load_from_invalid_toml_uses_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "this is [not toml").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        plan_file: Some("$COURSE_PLANNER/other.json".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert!(config.paths.plan_file.ends_with("other.json"));
    assert!(!config.paths.plan_file.contains('$'));
    assert_eq!(config.reports_path(), PathBuf::from("./custom_reports"));
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let plan_file = config.paths.plan_file.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.plan_file, plan_file);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[planner]"));
    assert!(display_str.contains("[requirements]"));
    assert!(display_str.contains("politics = 18.5"));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[[requirements]]
category = "politics"
credits = 1.0
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.requirements.len(), 1);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_get_config_paths() {
    let dir = Config::get_config_dir();
    assert!(dir.to_string_lossy().contains("courseplanner"));

    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
