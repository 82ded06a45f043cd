use crate::analyzers::utility::mean;
use crate::student::{Grade, GradedRecord, StudentRecord};

/// Converts a final score into a letter grade.
///
/// | Range            | Grade |
/// |------------------|-------|
/// | >= 70            | A     |
/// | >= 50 and < 70   | B     |
/// | >= 35 and < 50   | C     |
/// | < 35             | F     |
pub fn grade(score: f64) -> Grade {
    match score {
        s if s >= 70.0 => Grade::A,
        s if s >= 50.0 => Grade::B,
        s if s >= 35.0 => Grade::C,
        _ => Grade::F,
    }
}

/// Average of the four test scores, without truncation.
pub fn final_score(student: &StudentRecord) -> f64 {
    let scores = student.scores().map(|s| s as f64);
    mean(&scores)
}

pub fn grade_student(student: StudentRecord) -> GradedRecord {
    let final_score = final_score(&student);
    GradedRecord {
        student,
        final_score,
        grade: grade(final_score),
    }
}

/// Grades every student, keeping input order.
pub fn grade_all(students: Vec<StudentRecord>) -> Vec<GradedRecord> {
    students.into_iter().map(grade_student).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_scores(scores: [i64; 4]) -> StudentRecord {
        StudentRecord::new("Test", "Student", "Uni", scores)
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade(100.0), Grade::A);
        assert_eq!(grade(70.0), Grade::A);
        assert_eq!(grade(69.75), Grade::B);
        assert_eq!(grade(50.0), Grade::B);
        assert_eq!(grade(49.75), Grade::C);
        assert_eq!(grade(35.0), Grade::C);
        assert_eq!(grade(34.75), Grade::F);
        assert_eq!(grade(0.0), Grade::F);
        assert_eq!(grade(-10.0), Grade::F);
    }

    #[test]
    fn test_final_score_does_not_truncate() {
        assert_eq!(final_score(&with_scores([70, 70, 70, 69])), 69.75);
        assert_eq!(final_score(&with_scores([1, 0, 0, 0])), 0.25);
    }

    #[test]
    fn test_grade_by_score_sum() {
        let cases = [
            ([70, 70, 70, 70], Grade::A), // 280
            ([70, 70, 70, 69], Grade::B), // 279
            ([50, 50, 50, 50], Grade::B), // 200
            ([50, 50, 50, 49], Grade::C), // 199
            ([35, 35, 35, 35], Grade::C), // 140
            ([35, 35, 35, 34], Grade::F), // 139
        ];
        for (scores, expected) in cases {
            assert_eq!(grade_student(with_scores(scores)).grade, expected, "{scores:?}");
        }
    }

    #[test]
    fn test_grade_ignores_identity_fields() {
        let a = grade_student(StudentRecord::new("A", "One", "X", [60, 70, 80, 90]));
        let b = grade_student(StudentRecord::new("B", "Two", "Y", [90, 80, 70, 60]));
        assert_eq!(a.final_score, b.final_score);
        assert_eq!(a.grade, b.grade);
    }

    #[test]
    fn test_grade_all_keeps_order() {
        let graded = grade_all(vec![
            StudentRecord::new("Ann", "Lee", "X", [80, 80, 80, 80]),
            StudentRecord::new("Bob", "Kim", "X", [60, 60, 60, 60]),
        ]);
        assert_eq!(graded[0].student.first_name, "Ann");
        assert_eq!(graded[0].grade, Grade::A);
        assert_eq!(graded[1].student.first_name, "Bob");
        assert_eq!(graded[1].grade, Grade::B);
    }
}
