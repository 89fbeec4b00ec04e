//! Enrollment planning
//!
//! [`EnrollmentPlan`] holds the student's enrollments against a shared
//! [`Catalog`] and enforces the scheduling rules: season matching, per-term
//! credit ceiling, and no duplicate enrollment. Every failing operation leaves
//! the plan untouched. Aggregates live in [`aggregates`], automatic placement of
//! required courses in [`placement`].

pub mod aggregates;
pub mod placement;

pub use aggregates::{CreditProgress, CreditProgressRow, WeightedGpa};
pub use placement::{AutoAddReport, DefaultPlacement};

use crate::core::catalog::Catalog;
use crate::core::error::{PlanError, PlanResult};
use crate::core::models::{
    plan_semesters, round_to, ActualSemester, Course, CourseType, Gpa, PlanItem,
};
use crate::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Default per-term credit ceiling
pub const DEFAULT_TERM_CREDIT_LIMIT: f64 = 30.0;

/// Default minimum elective credits
pub const DEFAULT_ELECTIVE_CREDIT_REQUIREMENT: f64 = 15.0;

/// Slack for accumulated floating-point error when comparing credit sums
const CREDIT_EPSILON: f64 = 1e-9;

/// A student's enrollment plan
#[derive(Debug, Clone)]
pub struct EnrollmentPlan {
    catalog: Arc<Catalog>,
    term_credit_limit: f64,
    elective_credit_requirement: f64,
    items: Vec<PlanItem>,
}

fn validate_setting(name: &'static str, value: f64) -> PlanResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PlanError::InvalidSetting { name, value })
    }
}

fn not_enrolled(course_id: &str) -> PlanError {
    PlanError::NotFound(format!("Course is not in the plan: {course_id}"))
}

impl EnrollmentPlan {
    /// Create an empty plan with the default limits
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            term_credit_limit: DEFAULT_TERM_CREDIT_LIMIT,
            elective_credit_requirement: DEFAULT_ELECTIVE_CREDIT_REQUIREMENT,
            items: Vec::new(),
        }
    }

    /// Create an empty plan with explicit limits
    ///
    /// # Errors
    /// Returns `InvalidSetting` if either value is negative or not finite
    pub fn with_limits(
        catalog: Arc<Catalog>,
        term_credit_limit: f64,
        elective_credit_requirement: f64,
    ) -> PlanResult<Self> {
        let mut plan = Self::new(catalog);
        plan.set_term_credit_limit(term_credit_limit)?;
        plan.set_elective_credit_requirement(elective_credit_requirement)?;
        Ok(plan)
    }

    /// Rebuild a plan from persisted items
    ///
    /// Items are checked for known course ids and duplicate enrollment only;
    /// season and credit-ceiling rules are not re-applied to stored state.
    ///
    /// # Errors
    /// Returns `NotFound` for unknown course ids and `DuplicateEnrollment` for
    /// repeated ones
    pub fn restore(&mut self, items: Vec<PlanItem>) -> PlanResult<()> {
        let mut restored: Vec<PlanItem> = Vec::with_capacity(items.len());
        for item in items {
            let course = self.catalog.get(&item.course_id)?;
            if restored.iter().any(|i| i.course_id == item.course_id) {
                return Err(PlanError::DuplicateEnrollment {
                    course_id: course.course_id.clone(),
                    name: course.name.clone(),
                });
            }
            restored.push(item);
        }
        self.items = restored;
        Ok(())
    }

    /// The catalog this plan resolves courses against
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog
    #[must_use]
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Enrolled items in insertion order
    #[must_use]
    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    /// Per-term credit ceiling
    #[must_use]
    pub const fn term_credit_limit(&self) -> f64 {
        self.term_credit_limit
    }

    /// Minimum elective credits checked by [`validate`](Self::validate)
    #[must_use]
    pub const fn elective_credit_requirement(&self) -> f64 {
        self.elective_credit_requirement
    }

    /// Change the per-term credit ceiling (applies to future additions only)
    ///
    /// # Errors
    /// Returns `InvalidSetting` if `limit` is negative or not finite
    pub fn set_term_credit_limit(&mut self, limit: f64) -> PlanResult<()> {
        self.term_credit_limit = validate_setting("term_credit_limit", limit)?;
        Ok(())
    }

    /// Change the minimum elective credits
    ///
    /// # Errors
    /// Returns `InvalidSetting` if `credits` is negative or not finite
    pub fn set_elective_credit_requirement(&mut self, credits: f64) -> PlanResult<()> {
        self.elective_credit_requirement =
            validate_setting("elective_credit_requirement", credits)?;
        Ok(())
    }

    /// Whether the course is enrolled
    #[must_use]
    pub fn has_course(&self, course_id: &str) -> bool {
        self.items.iter().any(|i| i.course_id == course_id)
    }

    fn item(&self, course_id: &str) -> PlanResult<&PlanItem> {
        self.items
            .iter()
            .find(|i| i.course_id == course_id)
            .ok_or_else(|| not_enrolled(course_id))
    }

    fn item_mut(&mut self, course_id: &str) -> PlanResult<&mut PlanItem> {
        self.items
            .iter_mut()
            .find(|i| i.course_id == course_id)
            .ok_or_else(|| not_enrolled(course_id))
    }

    /// Resolve an item's course. Items only ever reference catalog courses.
    fn course_of(&self, item: &PlanItem) -> Option<&Course> {
        self.catalog.get(&item.course_id).ok()
    }

    /// Items paired with their catalog courses
    pub(crate) fn enrolled(&self) -> impl Iterator<Item = (&PlanItem, &Course)> {
        self.items
            .iter()
            .filter_map(|item| self.course_of(item).map(|course| (item, course)))
    }

    /// Enroll a course in a concrete semester
    ///
    /// # Errors
    /// - `InvalidActualSemester` if `actual_semester` is not `year + season`
    /// - `NotFound` if the course is not in the catalog
    /// - `DuplicateEnrollment` if the course is already enrolled
    /// - `SeasonMismatch` if the course is not offered in that season
    /// - `CreditCapExceeded` if the term would exceed its credit ceiling
    pub fn add_course(&mut self, course_id: &str, actual_semester: &str) -> PlanResult<()> {
        let semester: ActualSemester = actual_semester.parse()?;
        self.add_course_in(course_id, semester)
    }

    /// Enroll a course in an already-parsed semester
    ///
    /// # Errors
    /// Same as [`add_course`](Self::add_course); a year-0 semester is
    /// `InvalidActualSemester`
    pub fn add_course_in(&mut self, course_id: &str, semester: ActualSemester) -> PlanResult<()> {
        if semester.year() == 0 {
            return Err(PlanError::InvalidActualSemester(semester.to_string()));
        }
        let course = self.catalog.get(course_id)?;

        if self.has_course(course_id) {
            return Err(PlanError::DuplicateEnrollment {
                course_id: course.course_id.clone(),
                name: course.name.clone(),
            });
        }

        let offered = course.semester.season();
        if offered != semester.season() {
            return Err(PlanError::SeasonMismatch {
                course_id: course.course_id.clone(),
                name: course.name.clone(),
                offered: offered.to_string(),
                tag: course.semester.to_string(),
                target: semester.to_string(),
            });
        }

        let current = self.credits_in(semester);
        if current + course.credits > self.term_credit_limit + CREDIT_EPSILON {
            return Err(PlanError::CreditCapExceeded {
                semester: semester.to_string(),
                current,
                incoming: course.credits,
                limit: self.term_credit_limit,
            });
        }

        debug!("Enrolled {course_id} in {semester}");
        self.items.push(PlanItem::new(course_id, semester));
        Ok(())
    }

    /// Drop a course from the plan, discarding any grade
    ///
    /// # Errors
    /// Returns `NotFound` if the course is not enrolled
    pub fn remove_course(&mut self, course_id: &str) -> PlanResult<()> {
        let position = self
            .items
            .iter()
            .position(|i| i.course_id == course_id)
            .ok_or_else(|| not_enrolled(course_id))?;
        self.items.remove(position);
        debug!("Removed {course_id} from plan");
        Ok(())
    }

    /// Grade point of an enrolled course
    ///
    /// # Errors
    /// Returns `NotFound` if the course is not enrolled
    pub fn gpa(&self, course_id: &str) -> PlanResult<Option<Gpa>> {
        self.item(course_id).map(|i| i.gpa)
    }

    /// Record or clear the grade point of an enrolled course
    ///
    /// # Errors
    /// - `NotFound` if the course is not enrolled
    /// - `InvalidGpa` if the value is outside [0, 4.0] or not finite
    pub fn set_gpa(&mut self, course_id: &str, value: Option<f64>) -> PlanResult<()> {
        self.item(course_id)?;
        let gpa = value.map(Gpa::new).transpose()?;
        self.item_mut(course_id)?.gpa = gpa;
        debug!("Set GPA of {course_id} to {gpa:?}");
        Ok(())
    }

    /// Record or clear a grade point entered as text; blank text clears it
    ///
    /// # Errors
    /// - `NotFound` if the course is not enrolled
    /// - `InvalidGpa` if the text is not a number in [0, 4.0]
    pub fn set_gpa_str(&mut self, course_id: &str, text: &str) -> PlanResult<()> {
        self.item(course_id)?;
        let gpa = Gpa::parse_optional(text)?;
        self.set_gpa(course_id, gpa.map(Gpa::value))
    }

    /// Total credits of all enrolled courses
    #[must_use]
    pub fn total_credits(&self) -> f64 {
        round_to(self.enrolled().map(|(_, course)| course.credits).sum(), 3)
    }

    /// Credits of enrolled elective courses
    #[must_use]
    pub fn elective_credits(&self) -> f64 {
        let credits = self
            .enrolled()
            .filter(|(_, course)| course.course_type == CourseType::Elective)
            .map(|(_, course)| course.credits)
            .sum();
        round_to(credits, 3)
    }

    /// Required catalog courses not yet enrolled, sorted by id
    #[must_use]
    pub fn required_missing(&self) -> Vec<&Course> {
        let mut missing: Vec<&Course> = self
            .catalog
            .required_courses()
            .into_iter()
            .filter(|c| !self.has_course(&c.course_id))
            .collect();
        missing.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        missing
    }

    fn credits_in(&self, semester: ActualSemester) -> f64 {
        let credits = self
            .enrolled()
            .filter(|(item, _)| item.actual_semester == semester)
            .map(|(_, course)| course.credits)
            .sum();
        round_to(credits, 3)
    }

    /// Credits scheduled in one semester
    ///
    /// # Errors
    /// Returns `InvalidActualSemester` if `semester` is not `year + season`
    pub fn semester_credits(&self, semester: &str) -> PlanResult<f64> {
        Ok(self.credits_in(semester.parse()?))
    }

    /// Courses scheduled in one semester, sorted by id
    ///
    /// # Errors
    /// Returns `InvalidActualSemester` if `semester` is not `year + season`
    pub fn courses_in_semester(&self, semester: &str) -> PlanResult<Vec<&Course>> {
        let semester: ActualSemester = semester.parse()?;
        let mut courses: Vec<&Course> = self
            .enrolled()
            .filter(|(item, _)| item.actual_semester == semester)
            .map(|(_, course)| course)
            .collect();
        courses.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        Ok(courses)
    }

    /// Enrolled courses grouped by semester
    ///
    /// Every canonical planning slot is present (possibly empty); semesters
    /// outside the program that appear in the plan are included too. Each
    /// list is sorted by id.
    #[must_use]
    pub fn grouped_by_actual_semester(&self) -> BTreeMap<ActualSemester, Vec<&Course>> {
        let mut grouped: BTreeMap<ActualSemester, Vec<&Course>> = plan_semesters()
            .into_iter()
            .map(|semester| (semester, Vec::new()))
            .collect();
        for (item, course) in self.enrolled() {
            grouped.entry(item.actual_semester).or_default().push(course);
        }
        for courses in grouped.values_mut() {
            courses.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        }
        grouped
    }
}
