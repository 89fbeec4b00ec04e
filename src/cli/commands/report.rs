//! Report command handler
//!
//! Writes a Markdown or text report of the current plan.

use crate::commands::plan::PlanSession;
use course_planner::config::Config;
use course_planner::core::report::{ReportContext, ReportFormat};
use course_planner::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `session` - Loaded plan
/// * `format_str` - Report format (markdown, text)
/// * `output_file` - Optional output path
/// * `config` - Configuration with requirements and default reports directory
pub fn run(
    session: &PlanSession,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    generate_report(session, format_str, output_file, config).map_err(|err| {
        error!("Report generation failed for {}: {err}", session.path().display());
        err
    })
}

fn generate_report(
    session: &PlanSession,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("{e}. Use: markdown or text"))?;

    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = config.reports_path();
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let filename = session
            .path()
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("plan")
            .to_string();
        reports_dir.join(format!("{filename}_report.{}", format.extension()))
    };

    let requirements = config.credit_requirements();
    let ctx = ReportContext::new(session.plan(), &requirements).with_source(session.path());
    format
        .reporter()
        .generate(&ctx, &final_output_path)
        .map_err(|e| format!("Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());
    Ok(())
}
