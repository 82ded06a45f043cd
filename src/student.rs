use std::fmt;

use serde::Serialize;

/// One data row of the score file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub university: String,
    pub test1_score: i64,
    pub test2_score: i64,
    pub test3_score: i64,
    pub test4_score: i64,
}

impl StudentRecord {
    pub fn new(
        first_name: &str,
        last_name: &str,
        university: &str,
        scores: [i64; 4],
    ) -> Self {
        let [test1_score, test2_score, test3_score, test4_score] = scores;
        StudentRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            university: university.to_string(),
            test1_score,
            test2_score,
            test3_score,
            test4_score,
        }
    }

    pub fn scores(&self) -> [i64; 4] {
        [
            self.test1_score,
            self.test2_score,
            self.test3_score,
            self.test4_score,
        ]
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} from {} scored {}, {}, {} and {} marks in tests respectively",
            self.first_name,
            self.last_name,
            self.university,
            self.test1_score,
            self.test2_score,
            self.test3_score,
            self.test4_score
        )
    }
}

/// Letter bucket derived from a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student together with the average of their four tests and its grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedRecord {
    #[serde(flatten)]
    pub student: StudentRecord,
    pub final_score: f64,
    pub grade: Grade,
}

impl GradedRecord {
    pub fn university(&self) -> &str {
        &self.student.university
    }
}

impl fmt::Display for GradedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (final score {:.2}, grade {})",
            self.student, self.final_score, self.grade
        )
    }
}
