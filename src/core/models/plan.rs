//! Plan item model

use super::{ActualSemester, Gpa};

/// One enrollment in the plan: a course placed in a concrete semester
#[derive(Debug, Clone, PartialEq)]
pub struct PlanItem {
    /// Catalog identifier of the enrolled course
    pub course_id: String,

    /// Semester the course is actually taken in
    pub actual_semester: ActualSemester,

    /// Grade point, `None` until graded
    pub gpa: Option<Gpa>,
}

impl PlanItem {
    /// Create an ungraded plan item
    #[must_use]
    pub fn new(course_id: impl Into<String>, actual_semester: ActualSemester) -> Self {
        Self {
            course_id: course_id.into(),
            actual_semester,
            gpa: None,
        }
    }

    /// Whether a grade has been recorded
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.gpa.is_some()
    }
}
