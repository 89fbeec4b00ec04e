//! Plain-text report generator for terminal output

use crate::core::report::{
    describe_gpa, semester_gpa_chart, yearly_gpa_chart, ReportContext, ReportGenerator,
};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Width of chart bars at GPA 4.0
const CHART_WIDTH: usize = 40;

/// Plain-text report generator
pub struct TextReporter {
    chart_width: usize,
}

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chart_width: CHART_WIDTH,
        }
    }

    /// Use `width` characters for a full GPA bar
    #[must_use]
    pub const fn with_chart_width(mut self, width: usize) -> Self {
        self.chart_width = width;
        self
    }

    /// Render the summary panel: credits, GPAs and per-semester status
    #[must_use]
    pub fn render_summary(ctx: &ReportContext) -> String {
        let plan = ctx.plan;
        let mut output = String::new();

        let _ = writeln!(output, "Plan file: {}", ctx.source_label());
        let _ = writeln!(
            output,
            "Selected credits: {}    Elective credits: {} / {}    Missing required: {}",
            plan.total_credits(),
            plan.elective_credits(),
            plan.elective_credit_requirement(),
            ctx.required_missing().len()
        );

        let yearly: Vec<String> = plan
            .yearly_gpa()
            .iter()
            .map(|(year, gpa)| format!("Y{year}: {}", describe_gpa(gpa)))
            .collect();
        let _ = writeln!(
            output,
            "Overall GPA: {}    Major GPA: {}    Yearly GPA: {}",
            describe_gpa(&plan.overall_gpa()),
            describe_gpa(&plan.major_gpa()),
            if yearly.is_empty() {
                "n/a".to_string()
            } else {
                yearly.join("  ")
            }
        );

        let semesters: Vec<String> = semester_gpa_chart(plan)
            .bars
            .iter()
            .map(|bar| format!("{}: {}", bar.label, bar.annotation()))
            .collect();
        let _ = writeln!(
            output,
            "Semester GPA: {}",
            if semesters.is_empty() {
                "n/a".to_string()
            } else {
                semesters.join("  ")
            }
        );
        let _ = writeln!(output, "Term credit limit: {}", plan.term_credit_limit());

        output
    }

    /// Render the credit progress table with aligned columns
    #[must_use]
    pub fn render_progress(ctx: &ReportContext) -> String {
        let rows = ctx.progress_rows();
        let width = rows
            .iter()
            .map(|row| row.category.as_str().len())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        let mut output = String::new();
        let _ = writeln!(
            output,
            "{:<width$}  {:>9}  {:>9}  {:>9}  {:>9}",
            "Category", "Required", "Selected", "Completed", "Remaining"
        );
        for row in rows {
            let _ = writeln!(
                output,
                "{:<width$}  {:>9}  {:>9}  {:>9}  {:>9}",
                row.category.as_str(),
                row.required,
                row.selected,
                row.completed,
                row.remaining
            );
        }
        output
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut output = Self::render_summary(ctx);

        output.push_str("\nCredit progress\n");
        output.push_str(&Self::render_progress(ctx));

        let issues = ctx.plan.validate();
        output.push_str("\nValidation\n");
        if issues.is_empty() {
            output.push_str("  OK\n");
        }
        for issue in issues {
            let _ = writeln!(output, "  - {issue}");
        }

        output.push('\n');
        output.push_str(&semester_gpa_chart(ctx.plan).render_text(self.chart_width));
        output.push('\n');
        output.push_str(&yearly_gpa_chart(ctx.plan).render_text(self.chart_width));
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{Course, CourseType, CreditRequirements};
    use crate::core::planner::EnrollmentPlan;
    use std::sync::Arc;

    fn plan() -> EnrollmentPlan {
        let catalog = Catalog::new(vec![
            Course::new("A", "Alpha", CourseType::Required, 3.0, "fall".parse().unwrap()).unwrap(),
            Course::new("B", "Beta", CourseType::Elective, 3.0, "fall".parse().unwrap())
                .unwrap()
                .with_category("elective-major"),
        ])
        .unwrap();
        EnrollmentPlan::new(Arc::new(catalog))
    }

    #[test]
    fn test_summary_lines() {
        let mut plan = plan();
        plan.add_course("A", "1fall").unwrap();
        plan.add_course("B", "1fall").unwrap();
        plan.set_gpa("A", Some(3.5)).unwrap();
        plan.set_gpa("B", Some(4.0)).unwrap();
        let requirements = CreditRequirements::new();
        let ctx = ReportContext::new(&plan, &requirements);

        let summary = TextReporter::render_summary(&ctx);
        assert!(summary.contains("Selected credits: 6    Elective credits: 3 / 15"));
        assert!(summary.contains("Overall GPA: 3.750    Major GPA: 4.000    Yearly GPA: Y1: 3.750"));
        assert!(summary.contains("Semester GPA: 1fall: 3.750"));
    }

    #[test]
    fn test_render_includes_charts_and_issues() {
        let mut plan = plan();
        plan.add_course("B", "2fall").unwrap();
        let requirements: CreditRequirements = [("elective-major", 15.0)].into_iter().collect();
        let ctx = ReportContext::new(&plan, &requirements);

        let report = TextReporter::new().with_chart_width(4).render(&ctx).unwrap();
        assert!(report.contains("  - Missing required course: A Alpha"));
        assert!(report.contains("elective-major"));
        assert!(report.contains("  2fall      |    | missing 1"));
        assert!(report.contains("Overall GPA: incomplete (missing 1)"));
    }
}
