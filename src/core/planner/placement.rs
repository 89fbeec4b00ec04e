//! Automatic placement of required courses

use super::EnrollmentPlan;
use crate::core::error::{PlanError, PlanResult};
use crate::core::models::{ActualSemester, Course, SemesterTag, PROGRAM_YEARS};
use crate::{debug, info};

/// Where required courses without an exact semester are placed
///
/// A course tagged `2spring` goes to `2spring`. A season-only course (tagged
/// `spring`) goes to `spring` of [`year`](Self::year). A year-qualified tag
/// beyond the program length also falls back to that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultPlacement {
    /// Year used for season-only tags
    pub year: u32,
}

impl Default for DefaultPlacement {
    fn default() -> Self {
        Self {
            year: PROGRAM_YEARS,
        }
    }
}

impl DefaultPlacement {
    /// Place season-only courses in `year`
    #[must_use]
    pub const fn in_year(year: u32) -> Self {
        Self { year }
    }

    /// Target semester for a course with program tag `tag`
    #[must_use]
    pub fn target(&self, tag: SemesterTag) -> ActualSemester {
        match tag.as_actual() {
            Some(exact) if exact.is_in_program() => exact,
            _ => ActualSemester::new(self.year, tag.season()),
        }
    }
}

/// Outcome of a best-effort automatic placement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoAddReport {
    /// Courses enrolled, with their target semesters
    pub added: Vec<(String, ActualSemester)>,
    /// Courses that could not be enrolled, with the reason
    pub skipped: Vec<(String, PlanError)>,
}

impl EnrollmentPlan {
    /// Required courses not yet enrolled, ordered by (season, id)
    fn pending_required(&self) -> Vec<(String, SemesterTag)> {
        let mut pending: Vec<&Course> = self
            .catalog
            .required_courses()
            .into_iter()
            .filter(|c| !self.has_course(&c.course_id))
            .collect();
        pending.sort_by(|a, b| {
            a.semester
                .season()
                .cmp(&b.semester.season())
                .then_with(|| a.course_id.cmp(&b.course_id))
        });
        pending
            .into_iter()
            .map(|c| (c.course_id.clone(), c.semester))
            .collect()
    }

    /// Enroll every missing required course using the default placement
    ///
    /// All-or-nothing: if any course cannot be enrolled, the plan is restored
    /// to its state before the call and that error is returned.
    ///
    /// # Errors
    /// The first enrollment failure (typically `CreditCapExceeded`)
    pub fn auto_add_all_required(&mut self) -> PlanResult<usize> {
        self.auto_add_all_required_with(DefaultPlacement::default())
    }

    /// Enroll every missing required course using `placement`
    ///
    /// All-or-nothing, like [`auto_add_all_required`](Self::auto_add_all_required).
    /// Returns the number of courses added.
    ///
    /// # Errors
    /// The first enrollment failure
    pub fn auto_add_all_required_with(&mut self, placement: DefaultPlacement) -> PlanResult<usize> {
        let snapshot = self.items.clone();
        let pending = self.pending_required();
        for (course_id, tag) in &pending {
            if let Err(err) = self.add_course_in(course_id, placement.target(*tag)) {
                debug!("Auto-add aborted at {course_id}: {err}");
                self.items = snapshot;
                return Err(err);
            }
        }
        info!("Added {} required courses", pending.len());
        Ok(pending.len())
    }

    /// Enroll whatever missing required courses fit, skipping the rest
    pub fn auto_add_required_best_effort(&mut self, placement: DefaultPlacement) -> AutoAddReport {
        let mut report = AutoAddReport::default();
        for (course_id, tag) in self.pending_required() {
            let target = placement.target(tag);
            match self.add_course_in(&course_id, target) {
                Ok(()) => report.added.push((course_id, target)),
                Err(err) => {
                    debug!("Skipped {course_id}: {err}");
                    report.skipped.push((course_id, err));
                }
            }
        }
        info!(
            "Added {} required courses, skipped {}",
            report.added.len(),
            report.skipped.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{CourseType, Season};
    use std::sync::Arc;

    fn plan(limit: f64) -> EnrollmentPlan {
        let course = |id: &str, course_type, credits, tag: &str| {
            Course::new(id, format!("Course {id}"), course_type, credits, tag.parse().unwrap())
                .unwrap()
        };
        let catalog = Catalog::new(vec![
            course("R1", CourseType::Required, 3.0, "2spring"),
            course("R2", CourseType::Required, 3.0, "fall"),
            course("R3", CourseType::Required, 3.0, "fall"),
            course("R4", CourseType::Required, 1.0, "7summer"),
            course("E1", CourseType::Elective, 3.0, "fall"),
        ])
        .unwrap();
        EnrollmentPlan::with_limits(Arc::new(catalog), limit, 0.0).unwrap()
    }

    #[test]
    fn test_default_placement_targets() {
        let placement = DefaultPlacement::default();
        assert_eq!(
            placement.target("2spring".parse().unwrap()).to_string(),
            "2spring"
        );
        assert_eq!(
            placement.target(SemesterTag::floating(Season::Summer)).to_string(),
            "4summer"
        );
        assert_eq!(placement.target("9fall".parse().unwrap()).to_string(), "4fall");
        assert_eq!(
            DefaultPlacement::in_year(3)
                .target(SemesterTag::floating(Season::Fall))
                .to_string(),
            "3fall"
        );
    }

    #[test]
    fn test_auto_add_places_required_only() {
        let mut plan = plan(30.0);
        plan.add_course("R2", "1fall").unwrap();

        assert_eq!(plan.auto_add_all_required().unwrap(), 3);
        assert!(plan.required_missing().is_empty());
        assert!(!plan.has_course("E1"));

        let placed: Vec<String> = plan
            .items()
            .iter()
            .map(|i| format!("{}@{}", i.course_id, i.actual_semester))
            .collect();
        assert_eq!(placed, vec!["R2@1fall", "R3@4fall", "R1@2spring", "R4@4summer"]);
    }

    #[test]
    fn test_auto_add_is_all_or_nothing() {
        let mut plan = plan(3.0);

        let err = plan.auto_add_all_required().unwrap_err();
        assert!(matches!(err, PlanError::CreditCapExceeded { .. }));
        assert!(plan.items().is_empty());
    }

    #[test]
    fn test_best_effort_skips_overflow() {
        let mut plan = plan(3.0);

        let report = plan.auto_add_required_best_effort(DefaultPlacement::default());
        let added: Vec<&str> = report.added.iter().map(|(id, _)| id.as_str()).collect();
        let skipped: Vec<&str> = report.skipped.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(added, vec!["R2", "R1", "R4"]);
        assert_eq!(skipped, vec!["R3"]);
        assert_eq!(plan.items().len(), 3);
    }
}
