//! Command-line interface entry point for `courseplan`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::plan::{self, PlanSession};
use course_planner::config::Config;
use course_planner::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};
use course_planner::{debug, error, info};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // The stored config is what `config` subcommands edit; overrides only apply to this run
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);
    debug!("Effective configuration:\n{config}");

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut stored, &defaults),
        command => run_plan_command(command, &config),
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Configure level, debug, verbose and file logging from flags and config
fn init_logging(args: &Cli, config: &Config) {
    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
}

/// Load the plan document and run a plan subcommand against it
fn run_plan_command(command: Command, config: &Config) -> Result<(), String> {
    let mut session = PlanSession::open(&config.plan_path())?;
    let requirements = config.credit_requirements();

    match command {
        Command::Summary => plan::summary(&session, &requirements),
        Command::Catalog { season, required } => {
            plan::catalog(&session, season.as_deref(), required)?;
        }
        Command::Semester { semester } => plan::semester(&session, &semester)?,
        Command::Add {
            course_id,
            semester,
        } => plan::add(&mut session, &course_id, &semester)?,
        Command::Remove { course_id } => plan::remove(&mut session, &course_id)?,
        Command::Grade { course_id, gpa } => plan::grade(&mut session, &course_id, gpa.as_deref())?,
        Command::AutoRequired { best_effort, year } => {
            let placement = plan::placement_for(year, config);
            plan::auto_required(&mut session, placement, best_effort)?;
        }
        Command::Progress => plan::progress(&session, &requirements),
        Command::Validate => plan::validate(&session),
        Command::Chart { width } => plan::chart(&session, width),
        Command::Report { format, output } => {
            commands::report::run(&session, &format, output.as_deref(), config)?;
        }
        Command::Settings {
            term_limit,
            elective_requirement,
        } => plan::settings(&mut session, term_limit, elective_requirement)?,
        Command::Config { .. } => {}
    }
    Ok(())
}
