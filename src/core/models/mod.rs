//! Data models for the course planner

pub mod category;
pub mod course;
pub mod gpa;
pub mod plan;
pub mod requirements;
pub mod semester;

pub use category::Category;
pub use course::{Course, CourseType};
pub use gpa::{Gpa, MAX_GPA};
pub use plan::PlanItem;
pub use requirements::CreditRequirements;
pub use semester::{plan_semesters, ActualSemester, Season, SemesterTag, PROGRAM_YEARS, SEASONS};

/// Round `value` to `places` decimal digits (half away from zero)
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
