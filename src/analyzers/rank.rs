//! Topper selection over graded students.
//!
//! Both reductions keep the first record seen when scores tie: a holder is
//! only replaced by a strictly greater final score.

use std::collections::BTreeMap;

use crate::student::GradedRecord;

/// Highest final score across all students, or `None` when there are none.
pub fn overall_topper(records: &[GradedRecord]) -> Option<&GradedRecord> {
    records.iter().fold(None, |best, record| match best {
        Some(current) if record.final_score <= current.final_score => Some(current),
        _ => Some(record),
    })
}

/// Highest final score within each university, keyed by university name.
pub fn university_toppers(records: &[GradedRecord]) -> BTreeMap<&str, &GradedRecord> {
    let mut toppers: BTreeMap<&str, &GradedRecord> = BTreeMap::new();

    for record in records {
        toppers
            .entry(record.university())
            .and_modify(|current| {
                if record.final_score > current.final_score {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    toppers
}
