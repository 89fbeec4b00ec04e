//! Integration tests for report generation

use course_planner::models::{Course, CourseType, CreditRequirements};
use course_planner::report::{ReportContext, ReportFormat};
use course_planner::{Catalog, EnrollmentPlan};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn graded_plan() -> EnrollmentPlan {
    let course = |id: &str, course_type, credits, tag: &str, category: &str| {
        Course::new(id, format!("Course {id}"), course_type, credits, tag.parse().unwrap())
            .unwrap()
            .with_category(category)
    };
    let catalog = Catalog::new(vec![
        course("M1", CourseType::Required, 2.0, "fall", "required-major"),
        course("M2", CourseType::Elective, 1.0, "fall", "elective-major"),
        course("P1", CourseType::Required, 3.0, "spring", "politics"),
    ])
    .unwrap();

    let mut plan = EnrollmentPlan::new(Arc::new(catalog));
    plan.add_course("M1", "1fall").unwrap();
    plan.add_course("M2", "1fall").unwrap();
    plan.set_gpa("M1", Some(3.5)).unwrap();
    plan.set_gpa("M2", Some(4.0)).unwrap();
    plan
}

#[test]
fn test_markdown_report_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("plan_report.md");
    let plan = graded_plan();
    let requirements = CreditRequirements::program_default();
    let ctx = ReportContext::new(&plan, &requirements).with_source(Path::new("plan.json"));

    ReportFormat::Markdown
        .reporter()
        .generate(&ctx, &output)
        .expect("Failed to write report");

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("# Enrollment Plan Report"));
    assert!(content.contains("plan.json"));
    assert!(content.contains("3.667"));
    assert!(content.contains("P1"));
    assert!(content.contains("xychart-beta"));
    assert!(!content.contains("{{"));
}

#[test]
fn test_text_report_renders_sections() {
    let plan = graded_plan();
    let requirements = CreditRequirements::program_default();
    let ctx = ReportContext::new(&plan, &requirements);

    let format: ReportFormat = "txt".parse().unwrap();
    let content = format.reporter().render(&ctx).unwrap();

    assert!(content.contains("(in memory)"));
    assert!(content.contains("Credit progress"));
    assert!(content.contains("Validation"));
    assert!(content.contains("Semester GPA"));
    assert!(content.contains("1fall"));
}
