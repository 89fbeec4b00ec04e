//! Integration tests for plan document persistence

use course_planner::models::{Course, CourseType, SemesterTag};
use course_planner::seed::{BuiltinSeed, StaticSeed};
use course_planner::store::{self, DEFAULT_PLAN_FILE};
use course_planner::StoreError;
use std::fs;
use tempfile::TempDir;

fn sample_courses() -> Vec<Course> {
    let fall: SemesterTag = "fall".parse().unwrap();
    let spring: SemesterTag = "2spring".parse().unwrap();
    vec![
        Course::new("A1", "Algorithms", CourseType::Required, 3.0, fall)
            .unwrap()
            .with_category("required-major"),
        Course::new("B1", "Biology", CourseType::Elective, 2.0, spring)
            .unwrap()
            .with_hours("32"),
    ]
}

#[test]
fn test_load_or_init_creates_builtin_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data").join(DEFAULT_PLAN_FILE);

    let plan = store::load_or_init(&path, &BuiltinSeed).expect("Failed to init plan");

    assert!(path.exists());
    assert_eq!(plan.catalog().len(), 67);
    assert!(plan.items().is_empty());
    assert!((plan.term_credit_limit() - 30.0).abs() < 1e-9);
    assert!((plan.elective_credit_requirement() - 15.0).abs() < 1e-9);
}

#[test]
fn test_load_or_init_keeps_existing_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");

    let mut plan = store::load_or_init(&path, &StaticSeed::new(sample_courses())).unwrap();
    plan.add_course("A1", "1fall").unwrap();
    store::save(&path, &plan).unwrap();

    let reopened = store::load_or_init(&path, &BuiltinSeed).unwrap();
    assert_eq!(reopened.catalog().len(), 2);
    assert!(reopened.has_course("A1"));
}

#[test]
fn test_save_then_load_preserves_plan() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");
    let seed = StaticSeed::new(sample_courses())
        .with_term_credit_limit(12.0)
        .with_elective_credit_requirement(2.0);

    let mut plan = store::load_or_init(&path, &seed).unwrap();
    plan.add_course("A1", "3fall").unwrap();
    plan.add_course("B1", "2spring").unwrap();
    plan.set_gpa("A1", Some(3.25)).unwrap();
    store::save(&path, &plan).unwrap();

    let loaded = store::load(&path).unwrap();
    assert_eq!(loaded.items(), plan.items());
    assert!((loaded.term_credit_limit() - 12.0).abs() < 1e-9);
    assert!((loaded.elective_credit_requirement() - 2.0).abs() < 1e-9);
    assert_eq!(loaded.gpa("A1").unwrap().map(|g| g.value()), Some(3.25));
    assert_eq!(loaded.gpa("B1").unwrap(), None);

    let course = loaded.catalog().get("B1").unwrap();
    assert_eq!(course.hours.as_deref(), Some("32"));
    assert!(loaded.validate().is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = store::load(&temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(store::load(&path), Err(StoreError::Json(_))));
}

#[test]
fn test_invalid_content_is_plan_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.json");
    fs::write(
        &path,
        r#"{
          "courses": [
            {"course_id": "A1", "name": "Algorithms", "course_type": "required",
             "credits": 3.0, "semester": "fall"}
          ],
          "plan": {"items": [
            {"course_id": "A1", "actual_semester": "1winter", "gpa": null}
          ]}
        }"#,
    )
    .unwrap();

    assert!(matches!(store::load(&path), Err(StoreError::Plan(_))));
}
