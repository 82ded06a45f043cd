use crate::analyzers::grade::grade_all;
use crate::analyzers::rank::{overall_topper, university_toppers};
use crate::analyzers::types::Report;
use crate::error::Result;
use crate::parser::read_students;
use crate::student::GradedRecord;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

/// Reads, grades and ranks every student in `path`.
///
/// Any IO or parse failure aborts the run before grading starts.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn build_report(path: &Path) -> Result<Report> {
    let students = read_students(path)?;
    let graded = grade_all(students);
    debug!(count = graded.len(), "Students graded");

    let report = rank(path.display().to_string(), graded);

    match report.overall_topper() {
        Some(top) => info!(
            students = report.student_count,
            universities = report.university_toppers.len(),
            topper = %top.student.full_name(),
            final_score = top.final_score,
            "Report built"
        ),
        None => info!("No student records found"),
    }

    Ok(report)
}

/// Runs both rankers over already graded students.
pub fn rank(source: String, graded: Vec<GradedRecord>) -> Report {
    let overall = overall_topper(&graded).cloned();
    let per_university = university_toppers(&graded)
        .into_iter()
        .map(|(university, record)| (university.to_string(), record.clone()))
        .collect();

    Report {
        generated_at: Utc::now(),
        source,
        student_count: graded.len(),
        students: graded,
        overall_topper: overall,
        university_toppers: per_university,
    }
}
