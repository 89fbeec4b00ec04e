//! Error types for the planning core and its persistence layer

use thiserror::Error;

/// Validation failures raised by catalog and plan operations
///
/// None of these are transient; each describes an input the caller must fix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A course's program semester tag is not `(year)?(season)`
    #[error("Invalid semester tag '{0}' (expected e.g. 1fall, 2spring, fall, summer)")]
    InvalidSemesterTag(String),

    /// A season name is not one of fall, spring, summer
    #[error("Invalid season '{0}' (expected one of fall, spring, summer)")]
    InvalidSeason(String),

    /// An actual semester is not `year + season`
    #[error("Actual semester must look like 1fall, 2spring or 3summer, got '{0}'")]
    InvalidActualSemester(String),

    /// Two catalog courses share an identifier
    #[error("Duplicate course id in catalog: {0}")]
    DuplicateIdentifier(String),

    /// Unknown course, or a course that is not in the plan
    #[error("{0}")]
    NotFound(String),

    /// GPA outside [0, 4] or not a number
    #[error("Invalid GPA '{0}': must be a number between 0 and 4.0, or empty")]
    InvalidGpa(String),

    /// Course already enrolled in the plan
    #[error("Duplicate enrollment: {course_id} {name} is already in the plan")]
    DuplicateEnrollment {
        /// Course identifier
        course_id: String,
        /// Course display name
        name: String,
    },

    /// Target semester's season differs from the course's offered season
    #[error(
        "Season mismatch: {course_id} {name} is offered in {offered} (tag {tag}), cannot enroll in {target}"
    )]
    SeasonMismatch {
        /// Course identifier
        course_id: String,
        /// Course display name
        name: String,
        /// Season the course is offered in
        offered: String,
        /// The course's program semester tag
        tag: String,
        /// Requested actual semester
        target: String,
    },

    /// Adding the course would push the term over its credit ceiling
    #[error("{semester} credit limit exceeded: {current} + {incoming} > {limit}")]
    CreditCapExceeded {
        /// Target semester
        semester: String,
        /// Credits already scheduled in the semester
        current: f64,
        /// Credits of the course being added
        incoming: f64,
        /// Configured per-term ceiling
        limit: f64,
    },

    /// Course type is neither required nor elective
    #[error("Invalid course type '{0}' (expected required or elective)")]
    InvalidCourseType(String),

    /// Negative or non-finite credit value
    #[error("Invalid credits for course {course_id}: {credits}")]
    InvalidCredits {
        /// Course identifier
        course_id: String,
        /// Rejected credit value
        credits: f64,
    },

    /// Negative or non-finite plan setting
    #[error("Invalid value for {name}: {value}")]
    InvalidSetting {
        /// Setting name
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}

/// Failures while loading or saving a plan document
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape
    #[error("Malformed plan document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but failed domain validation
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Result alias for plan operations
pub type PlanResult<T> = Result<T, PlanError>;
