//! Integration tests for catalog and enrollment plan behavior

use course_planner::models::{Course, CourseType, CreditRequirements, SemesterTag};
use course_planner::planner::{DefaultPlacement, WeightedGpa};
use course_planner::{Catalog, EnrollmentPlan, PlanError};
use std::sync::Arc;

fn course(id: &str, course_type: CourseType, credits: f64, tag: &str) -> Course {
    let tag: SemesterTag = tag.parse().expect("valid tag");
    Course::new(id, format!("Course {id}"), course_type, credits, tag).expect("valid course")
}

fn plan_with(courses: Vec<Course>, term_limit: f64) -> EnrollmentPlan {
    let catalog = Catalog::new(courses).expect("unique ids");
    EnrollmentPlan::with_limits(Arc::new(catalog), term_limit, 15.0).expect("valid limits")
}

#[test]
fn test_credit_cap_rejects_overflowing_course() {
    let mut plan = plan_with(
        vec![
            course("A1", CourseType::Required, 3.0, "fall"),
            course("B1", CourseType::Elective, 2.0, "fall"),
        ],
        3.0,
    );

    plan.add_course("A1", "1fall").expect("fits exactly");
    let err = plan.add_course("B1", "1fall").unwrap_err();

    match err {
        PlanError::CreditCapExceeded {
            semester,
            current,
            incoming,
            limit,
        } => {
            assert_eq!(semester, "1fall");
            assert!((current - 3.0).abs() < 1e-9);
            assert!((incoming - 2.0).abs() < 1e-9);
            assert!((limit - 3.0).abs() < 1e-9);
        }
        other => panic!("expected CreditCapExceeded, got {other:?}"),
    }
    assert!(!plan.has_course("B1"));
    assert_eq!(plan.items().len(), 1);
}

#[test]
fn test_season_only_course_must_match_season() {
    let mut plan = plan_with(vec![course("C1", CourseType::Required, 2.0, "spring")], 30.0);

    assert!(matches!(
        plan.add_course("C1", "1fall"),
        Err(PlanError::SeasonMismatch { .. })
    ));
    assert!(plan.items().is_empty());

    plan.add_course("C1", "2spring").expect("season matches");
    assert!(plan.has_course("C1"));
}

#[test]
fn test_weighted_gpa_gate_then_value() {
    let mut plan = plan_with(
        vec![
            course("G1", CourseType::Required, 2.0, "fall"),
            course("G2", CourseType::Required, 1.0, "fall"),
        ],
        30.0,
    );
    plan.add_course("G1", "1fall").unwrap();
    plan.add_course("G2", "1fall").unwrap();
    plan.set_gpa("G1", Some(3.5)).unwrap();

    assert_eq!(
        plan.semester_gpa("1fall").unwrap(),
        WeightedGpa {
            average: None,
            ungraded: 1
        }
    );

    plan.set_gpa("G2", Some(4.0)).unwrap();
    assert_eq!(
        plan.semester_gpa("1fall").unwrap(),
        WeightedGpa {
            average: Some(3.667),
            ungraded: 0
        }
    );
}

#[test]
fn test_empty_plan_overall_gpa_is_absent() {
    let plan = plan_with(vec![course("A1", CourseType::Required, 3.0, "fall")], 30.0);
    assert_eq!(
        plan.overall_gpa(),
        WeightedGpa {
            average: None,
            ungraded: 0
        }
    );
}

#[test]
fn test_add_then_remove_round_trips() {
    let mut plan = plan_with(
        vec![
            course("A1", CourseType::Required, 3.0, "fall"),
            course("B1", CourseType::Elective, 2.0, "2spring"),
        ],
        30.0,
    );
    plan.add_course("A1", "1fall").unwrap();
    let before_total = plan.total_credits();

    plan.add_course("B1", "2spring").unwrap();
    assert!(plan.has_course("B1"));
    plan.remove_course("B1").unwrap();

    assert!(!plan.has_course("B1"));
    assert!((plan.total_credits() - before_total).abs() < 1e-9);
}

#[test]
fn test_duplicate_enrollment_fails_without_change() {
    let mut plan = plan_with(vec![course("A1", CourseType::Required, 3.0, "fall")], 30.0);
    plan.add_course("A1", "1fall").unwrap();
    let items_before = plan.items().to_vec();

    assert!(matches!(
        plan.add_course("A1", "1fall"),
        Err(PlanError::DuplicateEnrollment { .. })
    ));
    assert!(matches!(
        plan.add_course("A1", "2fall"),
        Err(PlanError::DuplicateEnrollment { .. })
    ));
    assert_eq!(plan.items(), items_before.as_slice());
}

#[test]
fn test_duplicate_catalog_id_is_rejected() {
    let result = Catalog::new(vec![
        course("X", CourseType::Required, 1.0, "fall"),
        course("X", CourseType::Elective, 4.0, "3summer"),
    ]);
    assert_eq!(
        result.unwrap_err(),
        PlanError::DuplicateIdentifier("X".to_string())
    );
}

#[test]
fn test_unknown_and_unenrolled_courses_are_not_found() {
    let mut plan = plan_with(vec![course("A1", CourseType::Required, 3.0, "fall")], 30.0);

    assert!(matches!(
        plan.add_course("Q9", "1fall"),
        Err(PlanError::NotFound(_))
    ));
    assert!(matches!(plan.remove_course("A1"), Err(PlanError::NotFound(_))));
    assert!(matches!(
        plan.set_gpa("A1", Some(3.0)),
        Err(PlanError::NotFound(_))
    ));
}

#[test]
fn test_invalid_gpa_leaves_grade_unchanged() {
    let mut plan = plan_with(vec![course("A1", CourseType::Required, 3.0, "fall")], 30.0);
    plan.add_course("A1", "1fall").unwrap();
    plan.set_gpa("A1", Some(3.0)).unwrap();

    assert!(matches!(
        plan.set_gpa_str("A1", "4.5"),
        Err(PlanError::InvalidGpa(_))
    ));
    assert!(matches!(
        plan.set_gpa_str("A1", "abc"),
        Err(PlanError::InvalidGpa(_))
    ));
    assert_eq!(plan.gpa("A1").unwrap().map(|g| g.value()), Some(3.0));

    plan.set_gpa_str("A1", "  ").unwrap();
    assert_eq!(plan.gpa("A1").unwrap(), None);
}

#[test]
fn test_remaining_credits_never_negative() {
    let mut plan = plan_with(
        vec![course("A1", CourseType::Required, 3.0, "fall").with_category("politics")],
        30.0,
    );
    plan.add_course("A1", "1fall").unwrap();
    plan.set_gpa("A1", Some(2.0)).unwrap();

    let requirements: CreditRequirements = [("politics", 1.0), ("physical-education", 4.0)]
        .into_iter()
        .collect();
    let rows = plan.credit_progress_rows(&requirements);

    assert!(rows.iter().all(|row| row.remaining >= 0.0));
    assert!(rows[0].remaining.abs() < 1e-9);
    assert!((rows[1].remaining - 4.0).abs() < 1e-9);
}

#[test]
fn test_validate_reports_shortfalls_as_data() {
    let mut plan = plan_with(
        vec![
            course("A1", CourseType::Required, 3.0, "fall"),
            course("E1", CourseType::Elective, 15.0, "fall"),
        ],
        30.0,
    );
    assert_eq!(plan.validate().len(), 2);

    plan.add_course("A1", "1fall").unwrap();
    plan.add_course("E1", "2fall").unwrap();
    assert!(plan.validate().is_empty());
}

#[test]
fn test_auto_add_restores_plan_on_failure() {
    let mut plan = plan_with(
        vec![
            course("R1", CourseType::Required, 2.0, "fall"),
            course("R2", CourseType::Required, 2.0, "fall"),
        ],
        3.0,
    );

    assert!(matches!(
        plan.auto_add_all_required(),
        Err(PlanError::CreditCapExceeded { .. })
    ));
    assert!(plan.items().is_empty());

    plan.set_term_credit_limit(4.0).unwrap();
    assert_eq!(plan.auto_add_all_required().unwrap(), 2);
    assert!(plan.required_missing().is_empty());
    assert!((plan.semester_credits("4fall").unwrap() - 4.0).abs() < 1e-9);
}

#[test]
fn test_year_zero_placement_is_rejected() {
    let mut plan = plan_with(vec![course("S1", CourseType::Required, 2.0, "spring")], 30.0);

    assert!(matches!(
        plan.auto_add_all_required_with(DefaultPlacement::in_year(0)),
        Err(PlanError::InvalidActualSemester(_))
    ));
    assert!(plan.items().is_empty());

    let report = plan.auto_add_required_best_effort(DefaultPlacement::in_year(0));
    assert!(report.added.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert!(plan.items().is_empty());
}

#[test]
fn test_fractional_credit_sums_are_rounded() {
    let mut plan = plan_with(
        vec![
            course("F1", CourseType::Elective, 2.2, "fall"),
            course("F2", CourseType::Elective, 1.1, "fall"),
            course("F3", CourseType::Elective, 0.1, "fall"),
        ],
        3.3,
    );
    plan.add_course("F1", "1fall").unwrap();
    plan.add_course("F2", "1fall").unwrap();

    assert_eq!(plan.semester_credits("1fall").unwrap().to_string(), "3.3");
    assert_eq!(plan.total_credits().to_string(), "3.3");
    assert_eq!(plan.elective_credits().to_string(), "3.3");

    let err = plan.add_course("F3", "1fall").unwrap_err();
    assert_eq!(err.to_string(), "1fall credit limit exceeded: 3.3 + 0.1 > 3.3");
}
