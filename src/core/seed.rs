//! Initial plan documents
//!
//! A [`SeedProvider`] supplies the document written when no plan file exists
//! yet.

use crate::core::error::StoreError;
use crate::core::models::Course;
use crate::core::planner::{DEFAULT_ELECTIVE_CREDIT_REQUIREMENT, DEFAULT_TERM_CREDIT_LIMIT};
use crate::core::store::{CourseRecord, PlanDocument, PlanRecord};

const BUILTIN_CATALOG: &str = include_str!("../assets/default_catalog.json");

/// Source of the document used to initialize a missing plan file
pub trait SeedProvider {
    /// Produce the initial document
    ///
    /// # Errors
    /// Returns an error if the seed data cannot be produced
    fn seed_document(&self) -> Result<PlanDocument, StoreError>;
}

/// The program's built-in curriculum with an empty plan
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSeed;

impl SeedProvider for BuiltinSeed {
    fn seed_document(&self) -> Result<PlanDocument, StoreError> {
        Ok(serde_json::from_str(BUILTIN_CATALOG)?)
    }
}

/// Caller-provided courses and settings with an empty plan
#[derive(Debug, Clone, Default)]
pub struct StaticSeed {
    courses: Vec<Course>,
    term_credit_limit: Option<f64>,
    elective_credit_requirement: Option<f64>,
}

impl StaticSeed {
    /// Seed from a list of courses with default plan settings
    #[must_use]
    pub const fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            term_credit_limit: None,
            elective_credit_requirement: None,
        }
    }

    /// Override the per-term credit ceiling
    #[must_use]
    pub const fn with_term_credit_limit(mut self, limit: f64) -> Self {
        self.term_credit_limit = Some(limit);
        self
    }

    /// Override the elective credit requirement
    #[must_use]
    pub const fn with_elective_credit_requirement(mut self, credits: f64) -> Self {
        self.elective_credit_requirement = Some(credits);
        self
    }
}

impl SeedProvider for StaticSeed {
    fn seed_document(&self) -> Result<PlanDocument, StoreError> {
        Ok(PlanDocument {
            courses: self.courses.iter().map(CourseRecord::from).collect(),
            plan: PlanRecord {
                term_credit_limit: self.term_credit_limit.unwrap_or(DEFAULT_TERM_CREDIT_LIMIT),
                elective_credit_requirement: self
                    .elective_credit_requirement
                    .unwrap_or(DEFAULT_ELECTIVE_CREDIT_REQUIREMENT),
                items: Vec::new(),
            },
        })
    }
}
