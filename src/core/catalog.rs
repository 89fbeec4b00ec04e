//! Course catalog
//!
//! An immutable registry of the program's courses, keyed by course id and kept
//! in insertion order.

use crate::core::error::{PlanError, PlanResult};
use crate::core::models::{Course, CourseType, Season};
use std::collections::HashMap;

/// Courses offered in one season, split by type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonOffering<'a> {
    /// Required courses, sorted by (program semester tag, id)
    pub required: Vec<&'a Course>,
    /// Elective courses, sorted by (program semester tag, id)
    pub elective: Vec<&'a Course>,
}

/// The full set of course definitions for a program
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting repeated course ids
    ///
    /// # Errors
    /// Returns `DuplicateIdentifier` if two courses share an id
    pub fn new(courses: Vec<Course>) -> PlanResult<Self> {
        let mut index = HashMap::with_capacity(courses.len());
        for (position, course) in courses.iter().enumerate() {
            if index.insert(course.course_id.clone(), position).is_some() {
                return Err(PlanError::DuplicateIdentifier(course.course_id.clone()));
            }
        }
        Ok(Self { courses, index })
    }

    /// Look up a course by id
    ///
    /// # Errors
    /// Returns `NotFound` if no course has this id
    pub fn get(&self, course_id: &str) -> PlanResult<&Course> {
        self.index
            .get(course_id)
            .map(|&position| &self.courses[position])
            .ok_or_else(|| PlanError::NotFound(format!("Course not found in catalog: {course_id}")))
    }

    /// Whether a course with this id exists
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// All courses in insertion order
    #[must_use]
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Required courses in insertion order
    #[must_use]
    pub fn required_courses(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_required()).collect()
    }

    /// Courses offered in the named season, split by type
    ///
    /// # Errors
    /// Returns `InvalidSeason` if `season` is not fall, spring or summer
    pub fn offered_in_season(&self, season: &str) -> PlanResult<SeasonOffering<'_>> {
        Ok(self.offered_in(season.parse()?))
    }

    /// Courses offered in `season`, split by type
    #[must_use]
    pub fn offered_in(&self, season: Season) -> SeasonOffering<'_> {
        let mut offering = SeasonOffering::default();
        for course in self.courses.iter().filter(|c| c.semester.season() == season) {
            match course.course_type {
                CourseType::Required => offering.required.push(course),
                CourseType::Elective => offering.elective.push(course),
            }
        }
        let by_tag_then_id = |a: &&Course, b: &&Course| {
            a.semester
                .to_string()
                .cmp(&b.semester.to_string())
                .then_with(|| a.course_id.cmp(&b.course_id))
        };
        offering.required.sort_by(by_tag_then_id);
        offering.elective.sort_by(by_tag_then_id);
        offering
    }
}
