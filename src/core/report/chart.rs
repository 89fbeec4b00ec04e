//! GPA bar charts
//!
//! Charts are plain data; they render either as fixed-width text bars for the
//! terminal or as Mermaid `xychart-beta` blocks for Markdown reports.

use crate::core::models::{plan_semesters, MAX_GPA};
use crate::core::planner::{EnrollmentPlan, WeightedGpa};
use std::fmt::Write;

const LABEL_WIDTH: usize = 10;

/// One bar of a GPA chart
#[derive(Debug, Clone, PartialEq)]
pub struct GpaBar {
    /// Semester or year label
    pub label: String,
    /// Bar height; 0.0 when the GPA is not computable
    pub value: f64,
    /// Why the value is missing (`missing N` or `n/a`)
    pub note: Option<String>,
}

impl GpaBar {
    fn from_gpa(label: String, gpa: &WeightedGpa) -> Self {
        match gpa.average {
            Some(value) => Self {
                label,
                value,
                note: None,
            },
            None => Self {
                label,
                value: 0.0,
                note: Some(missing_note(gpa)),
            },
        }
    }

    /// Value text, or the note when the GPA is missing
    #[must_use]
    pub fn annotation(&self) -> String {
        self.note
            .clone()
            .unwrap_or_else(|| format!("{:.3}", self.value))
    }
}

fn missing_note(gpa: &WeightedGpa) -> String {
    if gpa.ungraded > 0 {
        format!("missing {}", gpa.ungraded)
    } else {
        "n/a".to_string()
    }
}

/// A titled list of GPA bars on a 0-4 scale
#[derive(Debug, Clone, PartialEq)]
pub struct GpaChart {
    /// Chart title
    pub title: String,
    /// Bars in display order
    pub bars: Vec<GpaBar>,
}

impl GpaChart {
    /// Whether the chart has nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Render as horizontal text bars `width` characters long at 4.0
    #[must_use]
    pub fn render_text(&self, width: usize) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{}", self.title);

        if self.bars.is_empty() {
            output.push_str("  (no enrollments yet)\n");
            return output;
        }

        for bar in &self.bars {
            let filled = bar_length(bar.value, width);
            let _ = writeln!(
                output,
                "  {:<LABEL_WIDTH$} |{}{}| {}",
                bar.label,
                "#".repeat(filled),
                " ".repeat(width - filled),
                bar.annotation()
            );
        }
        output
    }

    /// Render as a Mermaid bar chart block
    #[must_use]
    pub fn to_mermaid(&self) -> String {
        let labels: Vec<String> = self
            .bars
            .iter()
            .map(|bar| format!("\"{}\"", bar.label))
            .collect();
        let values: Vec<String> = self
            .bars
            .iter()
            .map(|bar| format!("{:.3}", bar.value))
            .collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"{}\"", self.title);
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"GPA\" 0 --> {MAX_GPA}");
        let _ = writeln!(output, "    bar [{}]", values.join(", "));
        output.push_str("```\n");
        output
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_length(value: f64, width: usize) -> usize {
    let ratio = (value / MAX_GPA).clamp(0.0, 1.0);
    ((ratio * width as f64).round() as usize).min(width)
}

/// Weighted GPA per semester, for every semester with scheduled credits
#[must_use]
pub fn semester_gpa_chart(plan: &EnrollmentPlan) -> GpaChart {
    let mut bars = Vec::new();
    for semester in plan_semesters() {
        let label = semester.to_string();
        let Ok(credits) = plan.semester_credits(&label) else {
            continue;
        };
        if credits <= 0.0 {
            continue;
        }
        if let Ok(gpa) = plan.semester_gpa(&label) {
            bars.push(GpaBar::from_gpa(label, &gpa));
        }
    }
    GpaChart {
        title: "Semester GPA (credit-weighted)".to_string(),
        bars,
    }
}

/// Weighted GPA per year, for every year with enrollments
#[must_use]
pub fn yearly_gpa_chart(plan: &EnrollmentPlan) -> GpaChart {
    let bars = plan
        .yearly_gpa()
        .iter()
        .map(|(year, gpa)| GpaBar::from_gpa(format!("Year {year}"), gpa))
        .collect();
    GpaChart {
        title: "Yearly GPA (credit-weighted)".to_string(),
        bars,
    }
}
