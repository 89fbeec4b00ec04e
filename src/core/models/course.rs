//! Course model

use super::{Category, SemesterTag};
use crate::core::error::PlanError;
use std::fmt;
use std::str::FromStr;

/// Whether a course is mandatory for the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseType {
    /// Must be taken to complete the program
    Required,
    /// Counts toward the elective credit requirement
    Elective,
}

impl CourseType {
    /// Lowercase type name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Elective => "elective",
        }
    }
}

impl FromStr for CourseType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "elective" => Ok(Self::Elective),
            _ => Err(PlanError::InvalidCourseType(s.to_string())),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a course in the program catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Unique course identifier (e.g., "23308952")
    pub course_id: String,

    /// Display name (e.g., "Data Structures")
    pub name: String,

    /// Required or elective
    pub course_type: CourseType,

    /// Credit value (non-negative, can be fractional)
    pub credits: f64,

    /// Program semester tag (e.g., "2fall" or "spring")
    pub semester: SemesterTag,

    /// Free-form contact hours or duration (e.g., "64", "2 weeks")
    pub hours: Option<String>,

    /// Program category used for credit-requirement bucketing
    pub category: Category,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `course_id` - Unique identifier
    /// * `name` - Display name
    /// * `course_type` - Required or elective
    /// * `credits` - Credit value
    /// * `semester` - Program semester tag
    ///
    /// # Errors
    /// Returns `InvalidCredits` if `credits` is negative or not finite
    pub fn new(
        course_id: impl Into<String>,
        name: impl Into<String>,
        course_type: CourseType,
        credits: f64,
        semester: SemesterTag,
    ) -> Result<Self, PlanError> {
        let course_id = course_id.into();
        if !credits.is_finite() || credits < 0.0 {
            return Err(PlanError::InvalidCredits { course_id, credits });
        }
        Ok(Self {
            course_id,
            name: name.into(),
            course_type,
            credits,
            semester,
            hours: None,
            category: Category::Uncategorized,
        })
    }

    /// Set the hours annotation
    #[must_use]
    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    /// Set the program category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = category.into();
        self
    }

    /// Whether the course is required
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.course_type == CourseType::Required
    }
}
