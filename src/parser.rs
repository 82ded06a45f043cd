//! Comma-separated parser for student score files.
//!
//! The first line is a header and is dropped without inspection. Every other
//! non-blank line must carry at least seven fields:
//! `first,last,university,test1,test2,test3,test4`. Splitting is a plain
//! split on `,`; quoting is not recognised.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ParseError, Result};
use crate::source::RecordSource;
use crate::student::StudentRecord;

const DELIMITER: char = ',';
const MIN_FIELDS: usize = 7;
const FIRST_SCORE_FIELD: usize = 3;

/// Parses a single data line. `line_no` is only used for error reporting.
///
/// # Errors
///
/// Returns [`ParseError::MissingFields`] for short rows and
/// [`ParseError::InvalidScore`] when one of the four scores is not a base-10
/// integer.
pub fn parse_line(line_no: usize, line: &str) -> std::result::Result<StudentRecord, ParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::MissingFields {
            line: line_no,
            found: fields.len(),
        });
    }

    let mut scores = [0i64; 4];
    for (i, score) in scores.iter_mut().enumerate() {
        let raw = fields[FIRST_SCORE_FIELD + i];
        *score = raw.parse().map_err(|source| ParseError::InvalidScore {
            line: line_no,
            test: i + 1,
            value: raw.to_string(),
            source,
        })?;
    }

    Ok(StudentRecord::new(fields[0], fields[1], fields[2], scores))
}

/// Builds the student list from a line sequence.
///
/// Blank and whitespace-only lines after the header are skipped. The first
/// failing line aborts the whole batch and nothing is returned.
pub fn parse_students<I>(lines: I) -> Result<Vec<StudentRecord>>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut lines = lines.into_iter();
    let mut students = Vec::new();

    // header
    if let Some(header) = lines.next() {
        header?;
    }

    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_line(idx + 2, &line)?);
    }

    Ok(students)
}

/// Parses an in-memory file body.
pub fn parse_str(input: &str) -> Result<Vec<StudentRecord>> {
    parse_students(input.lines().map(|l| Ok(l.to_string())))
}

/// Opens `path` and parses every student in it.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_students(path: &Path) -> Result<Vec<StudentRecord>> {
    let source = RecordSource::open(path)?;
    debug!("Parsing student records");
    let students = parse_students(source)?;
    info!(count = students.len(), "Student records parsed");
    Ok(students)
}
