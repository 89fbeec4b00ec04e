//! Derived plan statistics
//!
//! All aggregates are computed on demand from the current items; nothing is
//! cached between calls.

use super::EnrollmentPlan;
use crate::core::error::PlanResult;
use crate::core::models::{round_to, ActualSemester, Category, Course, CreditRequirements, PlanItem};
use std::collections::{BTreeMap, HashMap};

/// Credit-weighted GPA of a subset of enrollments
///
/// `average` is `None` when the subset is empty, has zero total credits, or
/// contains any ungraded course; `ungraded` counts the ungraded courses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedGpa {
    /// Weighted average rounded to 3 decimals, if computable
    pub average: Option<f64>,
    /// Number of ungraded courses in the subset
    pub ungraded: usize,
}

impl WeightedGpa {
    /// Weighted GPA over `(item, course)` pairs
    ///
    /// A single ungraded course blanks the whole average.
    pub fn compute<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a PlanItem, &'a Course)>,
    {
        let entries: Vec<_> = entries.into_iter().collect();
        if entries.is_empty() {
            return Self::default();
        }

        let ungraded = entries.iter().filter(|(item, _)| !item.is_graded()).count();
        if ungraded > 0 {
            return Self {
                average: None,
                ungraded,
            };
        }

        let (weighted, credits) = entries
            .iter()
            .filter_map(|(item, course)| item.gpa.map(|gpa| (gpa.value(), course.credits)))
            .fold((0.0, 0.0), |(w, c), (gpa, credits)| (w + gpa * credits, c + credits));

        if credits <= 0.0 {
            return Self::default();
        }
        Self {
            average: Some(round_to(weighted / credits, 3)),
            ungraded: 0,
        }
    }

    /// Whether an average could be computed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.average.is_some()
    }
}

/// Credit totals for one program category
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CreditProgress {
    /// Credits the program requires
    pub required: f64,
    /// Credits enrolled, graded or not
    pub selected: f64,
    /// Credits of graded enrollments
    pub completed: f64,
}

/// One row of the credit-progress table
#[derive(Debug, Clone, PartialEq)]
pub struct CreditProgressRow {
    /// Program category
    pub category: Category,
    /// Credits the program requires
    pub required: f64,
    /// Credits enrolled, graded or not
    pub selected: f64,
    /// Credits of graded enrollments
    pub completed: f64,
    /// `max(required - completed, 0)`
    pub remaining: f64,
}

impl EnrollmentPlan {
    /// Weighted GPA of one semester
    ///
    /// # Errors
    /// Returns `InvalidActualSemester` if `semester` is not `year + season`
    pub fn semester_gpa(&self, semester: &str) -> PlanResult<WeightedGpa> {
        let semester: ActualSemester = semester.parse()?;
        Ok(WeightedGpa::compute(
            self.enrolled()
                .filter(|(item, _)| item.actual_semester == semester),
        ))
    }

    /// Weighted GPA per program year, keyed by the semester's year digits
    #[must_use]
    pub fn yearly_gpa(&self) -> BTreeMap<u32, WeightedGpa> {
        let mut buckets: BTreeMap<u32, Vec<(&PlanItem, &Course)>> = BTreeMap::new();
        for entry in self.enrolled() {
            buckets
                .entry(entry.0.actual_semester.year())
                .or_default()
                .push(entry);
        }
        buckets
            .into_iter()
            .map(|(year, entries)| (year, WeightedGpa::compute(entries)))
            .collect()
    }

    /// Weighted GPA of the major courses (`required-major` and `elective-major`)
    #[must_use]
    pub fn major_gpa(&self) -> WeightedGpa {
        self.major_gpa_for(&Category::major())
    }

    /// Weighted GPA of courses in any of `categories`
    #[must_use]
    pub fn major_gpa_for(&self, categories: &[Category]) -> WeightedGpa {
        WeightedGpa::compute(
            self.enrolled()
                .filter(|(_, course)| categories.contains(&course.category)),
        )
    }

    /// Weighted GPA of every enrollment
    #[must_use]
    pub fn overall_gpa(&self) -> WeightedGpa {
        WeightedGpa::compute(self.enrolled())
    }

    /// Selected and completed credits per category
    ///
    /// Every declared category gets an entry; categories that only appear in
    /// enrollments are added with zero required credits. Values are rounded to
    /// 3 decimals.
    #[must_use]
    pub fn credit_progress_by_category(
        &self,
        requirements: &CreditRequirements,
    ) -> HashMap<Category, CreditProgress> {
        let mut progress: HashMap<Category, CreditProgress> = requirements
            .iter()
            .map(|(category, required)| {
                (
                    category.clone(),
                    CreditProgress {
                        required,
                        ..CreditProgress::default()
                    },
                )
            })
            .collect();

        for (item, course) in self.enrolled() {
            let entry = progress.entry(course.category.clone()).or_default();
            entry.selected += course.credits;
            if item.is_graded() {
                entry.completed += course.credits;
            }
        }

        for entry in progress.values_mut() {
            entry.required = round_to(entry.required, 3);
            entry.selected = round_to(entry.selected, 3);
            entry.completed = round_to(entry.completed, 3);
        }
        progress
    }

    /// Credit progress as table rows
    ///
    /// Declared categories come first in declaration order, followed by any
    /// extra categories found in enrollments, alphabetically.
    #[must_use]
    pub fn credit_progress_rows(&self, requirements: &CreditRequirements) -> Vec<CreditProgressRow> {
        let mut progress = self.credit_progress_by_category(requirements);

        let mut extra: Vec<Category> = progress
            .keys()
            .filter(|category| !requirements.contains(category))
            .cloned()
            .collect();
        extra.sort();

        requirements
            .iter()
            .map(|(category, _)| category.clone())
            .chain(extra)
            .filter_map(|category| {
                progress.remove(&category).map(|p| CreditProgressRow {
                    remaining: round_to((p.required - p.completed).max(0.0), 3),
                    category,
                    required: p.required,
                    selected: p.selected,
                    completed: p.completed,
                })
            })
            .collect()
    }

    /// Business-rule shortfalls of the plan, one message per issue
    ///
    /// Lists every missing required course, then an elective-credit shortfall
    /// if any. An empty list means the plan satisfies the program rules.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues: Vec<String> = self
            .required_missing()
            .iter()
            .map(|c| format!("Missing required course: {} {}", c.course_id, c.name))
            .collect();

        let electives = self.elective_credits();
        if electives < self.elective_credit_requirement() {
            issues.push(format!(
                "Insufficient elective credits: {} < {}",
                round_to(electives, 3),
                self.elective_credit_requirement()
            ));
        }
        issues
    }
}
