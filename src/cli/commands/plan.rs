//! Plan command handlers
//!
//! Each handler works on a [`PlanSession`] and returns a message-ready error
//! string on failure. Mutating handlers save the plan document on success.

use course_planner::config::Config;
use course_planner::core::models::{Course, CreditRequirements};
use course_planner::core::planner::{DefaultPlacement, EnrollmentPlan};
use course_planner::core::report::{
    describe_gpa, semester_gpa_chart, yearly_gpa_chart, ReportContext, TextReporter,
};
use course_planner::core::seed::BuiltinSeed;
use course_planner::core::store;
use course_planner::{info, verbose};
use std::path::{Path, PathBuf};

/// A loaded plan document and the path it is saved back to
pub struct PlanSession {
    path: PathBuf,
    plan: EnrollmentPlan,
}

impl PlanSession {
    /// Load the plan at `path`, creating it from the built-in catalog if missing
    pub fn open(path: &Path) -> Result<Self, String> {
        verbose!("Using plan file: {}", path.display());
        let plan = store::load_or_init(path, &BuiltinSeed)
            .map_err(|e| format!("Failed to load plan {}: {e}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            plan,
        })
    }

    /// Path of the plan document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded plan
    pub const fn plan(&self) -> &EnrollmentPlan {
        &self.plan
    }

    fn save(&self) -> Result<(), String> {
        store::save(&self.path, &self.plan)
            .map_err(|e| format!("Failed to save plan {}: {e}", self.path.display()))
    }
}

fn course_line(course: &Course, enrolled: bool) -> String {
    format!(
        "{} {:<10} {}  [{}, {} cr, {}, {}]",
        if enrolled { "*" } else { " " },
        course.course_id,
        course.name,
        course.course_type,
        course.credits,
        course.semester,
        course.category
    )
}

/// Print the summary panel
pub fn summary(session: &PlanSession, requirements: &CreditRequirements) {
    let ctx = ReportContext::new(&session.plan, requirements).with_source(&session.path);
    print!("{}", TextReporter::render_summary(&ctx));
}

/// List catalog courses, optionally by season and/or required only
pub fn catalog(session: &PlanSession, season: Option<&str>, required_only: bool) -> Result<(), String> {
    let plan = &session.plan;
    let print_courses = |courses: &[&Course]| {
        for course in courses {
            println!("{}", course_line(course, plan.has_course(&course.course_id)));
        }
    };

    if let Some(season) = season {
        let offering = plan
            .catalog()
            .offered_in_season(season)
            .map_err(|e| e.to_string())?;
        println!("Required ({}):", offering.required.len());
        print_courses(offering.required.as_slice());
        if !required_only {
            println!("\nElective ({}):", offering.elective.len());
            print_courses(offering.elective.as_slice());
        }
        return Ok(());
    }

    let courses: Vec<&Course> = if required_only {
        plan.catalog().required_courses()
    } else {
        plan.catalog().all().iter().collect()
    };
    print_courses(courses.as_slice());
    println!("\n{} courses (* = enrolled)", courses.len());
    Ok(())
}

/// Print the courses, credits and GPA of one semester
pub fn semester(session: &PlanSession, semester: &str) -> Result<(), String> {
    let plan = &session.plan;
    let courses = plan.courses_in_semester(semester).map_err(|e| e.to_string())?;
    let credits = plan.semester_credits(semester).map_err(|e| e.to_string())?;
    let gpa = plan.semester_gpa(semester).map_err(|e| e.to_string())?;

    for course in &courses {
        let grade = plan
            .gpa(&course.course_id)
            .ok()
            .flatten()
            .map_or_else(|| "-".to_string(), |g| g.to_string());
        println!("{}  GPA {grade}", course_line(course, true));
    }
    println!(
        "\n{semester} credits: {credits} / limit {}",
        plan.term_credit_limit()
    );
    println!("{semester} GPA: {}", describe_gpa(&gpa));
    Ok(())
}

/// Enroll a course and save
pub fn add(session: &mut PlanSession, course_id: &str, semester: &str) -> Result<(), String> {
    session
        .plan
        .add_course(course_id, semester)
        .map_err(|e| e.to_string())?;
    session.save()?;
    println!("✓ Added {course_id} to {semester}");
    Ok(())
}

/// Remove an enrollment and save
pub fn remove(session: &mut PlanSession, course_id: &str) -> Result<(), String> {
    session
        .plan
        .remove_course(course_id)
        .map_err(|e| e.to_string())?;
    session.save()?;
    println!("✓ Removed {course_id}");
    Ok(())
}

/// Record (or clear, when `gpa` is `None`) a grade and save
pub fn grade(session: &mut PlanSession, course_id: &str, gpa: Option<&str>) -> Result<(), String> {
    session
        .plan
        .set_gpa_str(course_id, gpa.unwrap_or(""))
        .map_err(|e| e.to_string())?;
    session.save()?;
    match session.plan.gpa(course_id).ok().flatten() {
        Some(value) => println!("✓ Recorded GPA {value} for {course_id}"),
        None => println!("✓ Cleared GPA for {course_id}"),
    }
    Ok(())
}

/// Enroll missing required courses and save
pub fn auto_required(
    session: &mut PlanSession,
    placement: DefaultPlacement,
    best_effort: bool,
) -> Result<(), String> {
    if best_effort {
        let report = session.plan.auto_add_required_best_effort(placement);
        if !report.added.is_empty() {
            session.save()?;
        }
        for (course_id, semester) in &report.added {
            println!("✓ Added {course_id} to {semester}");
        }
        for (course_id, reason) in &report.skipped {
            println!("✗ Skipped {course_id}: {reason}");
        }
        println!(
            "{} added, {} skipped",
            report.added.len(),
            report.skipped.len()
        );
        return Ok(());
    }

    let added = session
        .plan
        .auto_add_all_required_with(placement)
        .map_err(|e| format!("No courses added: {e}"))?;
    if added > 0 {
        session.save()?;
    }
    println!("✓ Added {added} required courses");
    Ok(())
}

/// Print the credit progress table
pub fn progress(session: &PlanSession, requirements: &CreditRequirements) {
    let ctx = ReportContext::new(&session.plan, requirements);
    print!("{}", TextReporter::render_progress(&ctx));
}

/// Print validation issues
pub fn validate(session: &PlanSession) {
    let issues = session.plan.validate();
    if issues.is_empty() {
        println!("✓ The plan satisfies all program rules");
        return;
    }
    for issue in &issues {
        println!("⚠ {issue}");
    }
    info!("Validation found {} issues", issues.len());
}

/// Print both GPA charts
pub fn chart(session: &PlanSession, width: usize) {
    print!("{}", semester_gpa_chart(&session.plan).render_text(width));
    println!();
    print!("{}", yearly_gpa_chart(&session.plan).render_text(width));
}

/// Print plan settings, updating and saving any that are given
pub fn settings(
    session: &mut PlanSession,
    term_limit: Option<f64>,
    elective_requirement: Option<f64>,
) -> Result<(), String> {
    let changed = term_limit.is_some() || elective_requirement.is_some();
    if let Some(limit) = term_limit {
        session
            .plan
            .set_term_credit_limit(limit)
            .map_err(|e| e.to_string())?;
    }
    if let Some(credits) = elective_requirement {
        session
            .plan
            .set_elective_credit_requirement(credits)
            .map_err(|e| e.to_string())?;
    }
    if changed {
        session.save()?;
        println!("✓ Settings updated");
    }

    println!("term_credit_limit = {}", session.plan.term_credit_limit());
    println!(
        "elective_credit_requirement = {}",
        session.plan.elective_credit_requirement()
    );
    Ok(())
}

/// Placement for auto-add: an explicit year wins over the config
pub fn placement_for(year: Option<u32>, config: &Config) -> DefaultPlacement {
    year.map_or_else(|| config.placement(), DefaultPlacement::in_year)
}
