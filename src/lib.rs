//! Course enrollment planner
//!
//! Plans a four-year program: a fixed course catalog, enrollments into actual
//! semesters under season and credit-cap rules, credit-weighted GPA
//! aggregates, requirement progress, and JSON persistence.

pub mod core;
pub mod logger;

pub use crate::core::catalog::Catalog;
pub use crate::core::config;
pub use crate::core::error::{PlanError, PlanResult, StoreError};
pub use crate::core::get_version;
pub use crate::core::planner::EnrollmentPlan;
pub use crate::core::{models, planner, report, seed, store};
