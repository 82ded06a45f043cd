//! Data types produced by the report pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::student::GradedRecord;

/// Complete result of one run over a score file.
#[derive(Debug, Serialize)]
pub struct Report {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) source: String,
    pub(crate) student_count: usize,
    pub(crate) students: Vec<GradedRecord>,
    /// `None` when the file held no data rows.
    pub(crate) overall_topper: Option<GradedRecord>,
    pub(crate) university_toppers: BTreeMap<String, GradedRecord>,
}

impl Report {
    pub fn students(&self) -> &[GradedRecord] {
        &self.students
    }

    pub fn overall_topper(&self) -> Option<&GradedRecord> {
        self.overall_topper.as_ref()
    }

    pub fn university_toppers(&self) -> &BTreeMap<String, GradedRecord> {
        &self.university_toppers
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn student_count(&self) -> usize {
        self.student_count
    }

    pub fn is_empty(&self) -> bool {
        self.student_count == 0
    }
}
