//! Plan document persistence
//!
//! The document is a single pretty-printed JSON file holding the course list
//! and the plan state. Loading runs every record through the same
//! constructors used at runtime, so a corrupt file fails with the same errors
//! as a bad runtime call.

use crate::core::catalog::Catalog;
use crate::core::error::{PlanError, StoreError};
use crate::core::models::{ActualSemester, Category, Course, CourseType, Gpa, PlanItem};
use crate::core::planner::{
    EnrollmentPlan, DEFAULT_ELECTIVE_CREDIT_REQUIREMENT, DEFAULT_TERM_CREDIT_LIMIT,
};
use crate::core::seed::SeedProvider;
use crate::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Default plan document file name
pub const DEFAULT_PLAN_FILE: &str = "plan.json";

/// Serialized course definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Unique course identifier
    pub course_id: String,
    /// Display name
    pub name: String,
    /// `required` or `elective`
    pub course_type: String,
    /// Credit value
    pub credits: f64,
    /// Program semester tag
    pub semester: String,
    /// Optional hours annotation
    #[serde(default)]
    pub hours: Option<String>,
    /// Program category
    #[serde(default)]
    pub category: Option<String>,
}

/// Serialized enrollment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItemRecord {
    /// Enrolled course id
    pub course_id: String,
    /// Actual semester
    pub actual_semester: String,
    /// Grade point, if graded
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// Serialized plan state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Per-term credit ceiling
    #[serde(default = "default_term_credit_limit")]
    pub term_credit_limit: f64,
    /// Minimum elective credits
    #[serde(default = "default_elective_credit_requirement")]
    pub elective_credit_requirement: f64,
    /// Enrollments
    #[serde(default)]
    pub items: Vec<PlanItemRecord>,
}

const fn default_term_credit_limit() -> f64 {
    DEFAULT_TERM_CREDIT_LIMIT
}

const fn default_elective_credit_requirement() -> f64 {
    DEFAULT_ELECTIVE_CREDIT_REQUIREMENT
}

impl Default for PlanRecord {
    fn default() -> Self {
        Self {
            term_credit_limit: DEFAULT_TERM_CREDIT_LIMIT,
            elective_credit_requirement: DEFAULT_ELECTIVE_CREDIT_REQUIREMENT,
            items: Vec::new(),
        }
    }
}

/// The whole persisted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Course catalog
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
    /// Plan state
    #[serde(default)]
    pub plan: PlanRecord,
}

impl CourseRecord {
    /// Validate into a [`Course`]
    ///
    /// # Errors
    /// `InvalidCourseType`, `InvalidCredits` or `InvalidSemesterTag`
    pub fn to_course(&self) -> Result<Course, PlanError> {
        let course_type: CourseType = self.course_type.parse()?;
        let semester = self.semester.parse()?;
        let mut course = Course::new(
            self.course_id.clone(),
            self.name.clone(),
            course_type,
            self.credits,
            semester,
        )?
        .with_category(Category::new(self.category.as_deref().unwrap_or_default()));
        course.hours.clone_from(&self.hours);
        Ok(course)
    }
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.course_id.clone(),
            name: course.name.clone(),
            course_type: course.course_type.to_string(),
            credits: course.credits,
            semester: course.semester.to_string(),
            hours: course.hours.clone(),
            category: Some(course.category.to_string()),
        }
    }
}

impl PlanItemRecord {
    /// Validate into a [`PlanItem`]
    ///
    /// # Errors
    /// `InvalidActualSemester` or `InvalidGpa`
    pub fn to_item(&self) -> Result<PlanItem, PlanError> {
        let semester: ActualSemester = self.actual_semester.parse()?;
        let mut item = PlanItem::new(self.course_id.clone(), semester);
        item.gpa = self.gpa.map(Gpa::new).transpose()?;
        Ok(item)
    }
}

impl From<&PlanItem> for PlanItemRecord {
    fn from(item: &PlanItem) -> Self {
        Self {
            course_id: item.course_id.clone(),
            actual_semester: item.actual_semester.to_string(),
            gpa: item.gpa.map(Gpa::value),
        }
    }
}

/// Build a catalog and plan from a document
///
/// # Errors
/// Any validation failure of a course, item or setting
pub fn from_document(document: &PlanDocument) -> Result<EnrollmentPlan, PlanError> {
    let courses = document
        .courses
        .iter()
        .map(CourseRecord::to_course)
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = Arc::new(Catalog::new(courses)?);

    let mut plan = EnrollmentPlan::with_limits(
        catalog,
        document.plan.term_credit_limit,
        document.plan.elective_credit_requirement,
    )?;
    let items = document
        .plan
        .items
        .iter()
        .map(PlanItemRecord::to_item)
        .collect::<Result<Vec<_>, _>>()?;
    plan.restore(items)?;
    Ok(plan)
}

/// Snapshot a plan (and its catalog) as a document
#[must_use]
pub fn to_document(plan: &EnrollmentPlan) -> PlanDocument {
    PlanDocument {
        courses: plan.catalog().all().iter().map(CourseRecord::from).collect(),
        plan: PlanRecord {
            term_credit_limit: plan.term_credit_limit(),
            elective_credit_requirement: plan.elective_credit_requirement(),
            items: plan.items().iter().map(PlanItemRecord::from).collect(),
        },
    }
}

/// Parse a document from JSON text and validate it
///
/// # Errors
/// `Json` for malformed text, `Plan` for validation failures
pub fn from_json(json: &str) -> Result<EnrollmentPlan, StoreError> {
    let document: PlanDocument = serde_json::from_str(json)?;
    Ok(from_document(&document)?)
}

/// Serialize a plan as pretty-printed JSON
///
/// # Errors
/// Returns `Json` if serialization fails
pub fn to_json(plan: &EnrollmentPlan) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(&to_document(plan))?)
}

/// Load a plan document from `path`
///
/// # Errors
/// `Io` if the file cannot be read, `Json` if it is malformed, `Plan` if it
/// fails validation
pub fn load(path: &Path) -> Result<EnrollmentPlan, StoreError> {
    let content = fs::read_to_string(path)?;
    let plan = from_json(&content)?;
    info!(
        "Loaded plan from {} ({} courses, {} enrollments)",
        path.display(),
        plan.catalog().len(),
        plan.items().len()
    );
    Ok(plan)
}

/// Load `path`, first writing the seed document there if it does not exist
///
/// # Errors
/// Same as [`load`], plus seed and write failures
pub fn load_or_init(path: &Path, seed: &dyn SeedProvider) -> Result<EnrollmentPlan, StoreError> {
    if !path.exists() {
        let document = seed.seed_document()?;
        write_document(path, &document)?;
        info!("Created default plan document at {}", path.display());
    }
    load(path)
}

fn write_document(path: &Path, document: &PlanDocument) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Overwrite `path` with the current plan state
///
/// # Errors
/// `Io` if the file cannot be written
pub fn save(path: &Path, plan: &EnrollmentPlan) -> Result<(), StoreError> {
    write_document(path, &to_document(plan))?;
    info!("Saved plan to {}", path.display());
    Ok(())
}
