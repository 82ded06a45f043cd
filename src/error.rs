//! Error types for the grading pipeline.

use std::num::ParseIntError;
use std::path::PathBuf;

/// A data row that could not be turned into a student record.
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected at least 7 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: test {test} score {value:?} is not an integer: {source}")]
    InvalidScore {
        line: usize,
        test: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failures that abort a run. Either kind means no report is produced.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing test scores: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
