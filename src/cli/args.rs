//! CLI argument definitions for `courseplan`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_planner::config::ConfigOverrides;
use course_planner::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Level::from(*self).as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `plan_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show credits, GPA and requirement status of the plan.
    Summary,
    /// List catalog courses.
    Catalog {
        /// Only courses offered in this season (fall, spring, summer)
        #[arg(long, value_name = "SEASON")]
        season: Option<String>,

        /// Only required courses
        #[arg(long)]
        required: bool,
    },
    /// Show the courses and GPA of one semester.
    Semester {
        /// Actual semester, e.g. `2spring`
        #[arg(value_name = "SEMESTER")]
        semester: String,
    },
    /// Enroll a course in a semester.
    Add {
        /// Catalog course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Actual semester, e.g. `1fall`
        #[arg(value_name = "SEMESTER")]
        semester: String,
    },
    /// Remove an enrolled course.
    Remove {
        /// Enrolled course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// Record or clear the GPA of an enrolled course.
    ///
    /// Omitting GPA clears the recorded grade.
    Grade {
        /// Enrolled course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Grade point in [0, 4]
        #[arg(value_name = "GPA")]
        gpa: Option<String>,
    },
    /// Enroll every missing required course.
    ///
    /// All-or-nothing unless `--best-effort` is given.
    AutoRequired {
        /// Add what fits and report the rest instead of failing
        #[arg(long)]
        best_effort: bool,

        /// Year for season-only courses (defaults to config `final_year`)
        #[arg(long, value_name = "YEAR", value_parser = clap::value_parser!(u32).range(1..))]
        year: Option<u32>,
    },
    /// Show credit progress per program category.
    Progress,
    /// List business-rule shortfalls of the plan.
    Validate,
    /// Draw semester and yearly GPA bar charts.
    Chart {
        /// Bar width at GPA 4.0
        #[arg(long, value_name = "COLUMNS", default_value_t = 40)]
        width: usize,
    },
    /// Write a plan report.
    Report {
        /// Report format: markdown (md) or text (txt)
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: String,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show or change plan settings.
    Settings {
        /// Per-semester credit ceiling
        #[arg(long, value_name = "CREDITS")]
        term_limit: Option<f64>,

        /// Minimum elective credits
        #[arg(long, value_name = "CREDITS")]
        elective_requirement: Option<f64>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseplan",
    about = "Plan course enrollment, track GPA and program credits",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config plan document path
    #[arg(long = "config-plan-file", value_name = "PATH")]
    pub config_plan_file: Option<PathBuf>,

    /// Override config plan document path (short form)
    #[arg(long = "plan", value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--plan`) take precedence over long-form flags
    /// (e.g., `--config-plan-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            plan_file: path_string(self.plan.as_ref())
                .or_else(|| path_string(self.config_plan_file.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref())
                .or_else(|| path_string(self.config_reports_dir.as_ref())),
        }
    }
}
