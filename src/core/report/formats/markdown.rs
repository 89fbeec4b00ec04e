//! Markdown report generator
//!
//! Generates plan reports in Markdown with Mermaid GPA charts. These render
//! well in GitHub, GitLab, and VS Code.

use crate::core::report::{
    describe_gpa, semester_gpa_chart, yearly_gpa_chart, ReportContext, ReportGenerator,
};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let plan = ctx.plan;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{source}}", &ctx.source_label());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{total_credits}}", &plan.total_credits().to_string());
        output = output.replace("{{elective_credits}}", &plan.elective_credits().to_string());
        output = output.replace(
            "{{elective_requirement}}",
            &plan.elective_credit_requirement().to_string(),
        );
        output = output.replace(
            "{{required_missing_count}}",
            &ctx.required_missing().len().to_string(),
        );
        output = output.replace("{{term_limit}}", &plan.term_credit_limit().to_string());
        output = output.replace("{{overall_gpa}}", &describe_gpa(&plan.overall_gpa()));
        output = output.replace("{{major_gpa}}", &describe_gpa(&plan.major_gpa()));

        output = output.replace("{{semester_table}}", &Self::generate_semester_table(ctx));
        output = output.replace("{{progress_table}}", &Self::generate_progress_table(ctx));
        output = output.replace("{{validation}}", &Self::generate_validation(ctx));

        let semester_chart = semester_gpa_chart(plan);
        let yearly_chart = yearly_gpa_chart(plan);
        output = output.replace(
            "{{semester_chart}}",
            &Self::chart_or_placeholder(semester_chart.is_empty(), || semester_chart.to_mermaid()),
        );
        output = output.replace(
            "{{yearly_chart}}",
            &Self::chart_or_placeholder(yearly_chart.is_empty(), || yearly_chart.to_mermaid()),
        );

        output
    }

    fn chart_or_placeholder(empty: bool, render: impl FnOnce() -> String) -> String {
        if empty {
            "_No enrollments yet._\n".to_string()
        } else {
            render()
        }
    }

    /// Generate the semester-by-semester enrollment table
    fn generate_semester_table(ctx: &ReportContext) -> String {
        let plan = ctx.plan;
        let mut table = String::new();

        table.push_str("| Semester | Course | Name | Type | Credits | GPA |\n");
        table.push_str("|---|---|---|---|---|---|\n");

        let mut rows = 0;
        for (semester, courses) in plan.grouped_by_actual_semester() {
            for course in courses {
                let gpa = plan
                    .gpa(&course.course_id)
                    .ok()
                    .flatten()
                    .map_or_else(|| "-".to_string(), |g| g.to_string());
                let _ = writeln!(
                    table,
                    "| {semester} | {} | {} | {} | {} | {gpa} |",
                    course.course_id, course.name, course.course_type, course.credits
                );
                rows += 1;
            }
        }

        if rows == 0 {
            return "_No courses enrolled._\n".to_string();
        }
        table
    }

    /// Generate the per-category credit progress table
    fn generate_progress_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Category | Required | Selected | Completed | Remaining |\n");
        table.push_str("|---|---|---|---|---|\n");

        for row in ctx.progress_rows() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                row.category, row.required, row.selected, row.completed, row.remaining
            );
        }

        table
    }

    /// Generate the list of validation issues
    fn generate_validation(ctx: &ReportContext) -> String {
        let issues = ctx.plan.validate();
        if issues.is_empty() {
            return "✅ The plan satisfies all program rules.\n".to_string();
        }

        let mut list = String::new();
        for issue in issues {
            let _ = writeln!(list, "- ⚠️ {issue}");
        }
        list
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
