//! Output formatting and persistence for grading reports.
//!
//! Supports a plain-text report, JSON serialization, and CSV export of the
//! graded students.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::Report;
use crate::student::GradedRecord;
use csv::WriterBuilder;

/// Renders the human-readable report.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    let Some(top) = report.overall_topper() else {
        let _ = writeln!(out, "No student records found in {}", report.source());
        return out;
    };

    let _ = writeln!(out, "Overall topper: {top}");
    let _ = writeln!(out, "Topper per university:");
    for (university, record) in report.university_toppers() {
        let _ = writeln!(out, "  {university}: {record}");
    }

    out
}

/// Serializes the report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One flat CSV row per graded student.
#[derive(Serialize)]
struct GradedRow<'a> {
    first_name: &'a str,
    last_name: &'a str,
    university: &'a str,
    test1_score: i64,
    test2_score: i64,
    test3_score: i64,
    test4_score: i64,
    final_score: f64,
    grade: &'static str,
}

impl<'a> From<&'a GradedRecord> for GradedRow<'a> {
    fn from(r: &'a GradedRecord) -> Self {
        GradedRow {
            first_name: &r.student.first_name,
            last_name: &r.student.last_name,
            university: &r.student.university,
            test1_score: r.student.test1_score,
            test2_score: r.student.test2_score,
            test3_score: r.student.test3_score,
            test4_score: r.student.test4_score,
            final_score: r.final_score,
            grade: r.grade.as_str(),
        }
    }
}

/// Writes graded students to a CSV file, replacing any existing file.
pub fn write_graded_csv(path: &Path, records: &[GradedRecord]) -> Result<()> {
    debug!(path = %path.display(), rows = records.len(), "Writing graded CSV");

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for record in records {
        writer.serialize(GradedRow::from(record))?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = records.len(), "Graded CSV written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyzer::rank;
    use crate::analyzers::grade::grade_all;
    use crate::parser::parse_str;
    use std::fs;

    fn sample_report() -> Report {
        let students =
            parse_str("h\nAnn,Lee,X,80,80,80,80\nBob,Kim,X,60,60,60,60\nCy,Noh,Y,90,90,90,90\n")
                .unwrap();
        rank("sample.csv".to_string(), grade_all(students))
    }

    #[test]
    fn test_render_text_lists_toppers() {
        let text = render_text(&sample_report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Overall topper: Cy Noh from Y scored 90, 90, 90 and 90 marks in tests respectively (final score 90.00, grade A)"
        );
        assert_eq!(lines[1], "Topper per university:");
        assert!(lines[2].starts_with("  X: Ann Lee"));
        assert!(lines[3].starts_with("  Y: Cy Noh"));
    }

    #[test]
    fn test_render_text_empty_report() {
        let report = rank("empty.csv".to_string(), Vec::new());
        assert_eq!(render_text(&report), "No student records found in empty.csv\n");
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["student_count"], 3);
        assert_eq!(value["overall_topper"]["first_name"], "Cy");
        assert_eq!(value["university_toppers"]["X"]["first_name"], "Ann");
        assert_eq!(value["students"][1]["grade"], "B");
    }

    #[test]
    fn test_render_json_empty_topper_is_null() {
        let json = render_json(&rank("empty.csv".to_string(), Vec::new())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["overall_topper"].is_null());
    }

    #[test]
    fn test_write_graded_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graded.csv");

        let report = sample_report();
        write_graded_csv(&path, report.students()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "first_name,last_name,university,test1_score,test2_score,test3_score,test4_score,final_score,grade"
        );
        assert_eq!(lines[1], "Ann,Lee,X,80,80,80,80,80.0,A");
    }

    #[test]
    fn test_write_graded_csv_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graded.csv");

        let report = sample_report();
        write_graded_csv(&path, report.students()).unwrap();
        write_graded_csv(&path, &report.students()[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("first_name")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 2);
    }
}
