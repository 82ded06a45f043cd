//! Grading and ranking of parsed student records.
//!
//! Students are graded by the mean of their four tests, then reduced to an
//! overall topper and one topper per university.

pub mod analyzer;
pub mod grade;
pub mod rank;
pub mod types;
pub mod utility;
