//! Report generation for enrollment plans
//!
//! Reports summarize credits, GPA and requirement progress in Markdown (with
//! Mermaid GPA charts) or plain text for the terminal.

pub mod chart;
pub mod formats;

use crate::core::models::{Course, CreditRequirements};
use crate::core::planner::{CreditProgressRow, EnrollmentPlan, WeightedGpa};
use std::error::Error;
use std::path::Path;

pub use chart::{semester_gpa_chart, yearly_gpa_chart, GpaBar, GpaChart};
pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Plan being reported
    pub plan: &'a EnrollmentPlan,
    /// Category requirements for the progress table
    pub requirements: &'a CreditRequirements,
    /// File the plan was loaded from, if any
    pub source: Option<&'a Path>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(plan: &'a EnrollmentPlan, requirements: &'a CreditRequirements) -> Self {
        Self {
            plan,
            requirements,
            source: None,
        }
    }

    /// Record the plan document path
    #[must_use]
    pub const fn with_source(mut self, source: &'a Path) -> Self {
        self.source = Some(source);
        self
    }

    /// Plan document path for display
    #[must_use]
    pub fn source_label(&self) -> String {
        self.source
            .map_or_else(|| "(in memory)".to_string(), |p| p.display().to_string())
    }

    /// Number of enrolled courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.plan.items().len()
    }

    /// Required courses not yet enrolled
    #[must_use]
    pub fn required_missing(&self) -> Vec<&'a Course> {
        self.plan.required_missing()
    }

    /// Credit progress rows for the configured requirements
    #[must_use]
    pub fn progress_rows(&self) -> Vec<CreditProgressRow> {
        self.plan.credit_progress_rows(self.requirements)
    }
}

/// Human-readable weighted GPA: the value, what is missing, or `n/a`
#[must_use]
pub fn describe_gpa(gpa: &WeightedGpa) -> String {
    match gpa.average {
        Some(average) => format!("{average:.3}"),
        None if gpa.ungraded > 0 => format!("incomplete (missing {})", gpa.ungraded),
        None => "n/a".to_string(),
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
