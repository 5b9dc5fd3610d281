//! Grade record keyed by (student, homework).
//!
//! # Invariants
//! - At most one grade exists per `GradeKey`.
//! - Referenced student and homework must exist when the grade is created;
//!   later deletes do not cascade.

use super::homework::HomeworkId;
use super::student::StudentId;
use super::Entity;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Composite identifier of a grade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradeKey {
    pub student_id: StudentId,
    pub homework_id: HomeworkId,
}

impl GradeKey {
    pub fn new(student_id: impl Into<String>, homework_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            homework_id: homework_id.into(),
        }
    }
}

impl Display for GradeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.student_id, self.homework_id)
    }
}

/// A grade awarded to one student for one homework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub student_id: StudentId,
    pub homework_id: HomeworkId,
    /// Score on the 0.0..=10.0 scale.
    pub value: f64,
    /// Teaching week in which the homework was delivered.
    pub week: i32,
    /// Free-text remark, e.g. a late-submission note. May be empty.
    pub feedback: String,
}

impl Grade {
    pub fn new(
        student_id: impl Into<String>,
        homework_id: impl Into<String>,
        value: f64,
        week: i32,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            homework_id: homework_id.into(),
            value,
            week,
            feedback: feedback.into(),
        }
    }

    pub fn key(&self) -> GradeKey {
        GradeKey::new(self.student_id.as_str(), self.homework_id.as_str())
    }
}

impl Entity for Grade {
    type Id = GradeKey;

    const KIND: &'static str = "grade";

    fn id(&self) -> Self::Id {
        self.key()
    }
}

#[cfg(test)]
mod tests {
    use super::{Grade, GradeKey};
    use crate::model::Entity;

    #[test]
    fn grade_id_is_composite_key() {
        let grade = Grade::new("7", "hw-1", 9.5, 3, "");
        assert_eq!(grade.id(), GradeKey::new("7", "hw-1"));
    }

    #[test]
    fn grade_key_display_names_both_parts() {
        assert_eq!(GradeKey::new("7", "hw-1").to_string(), "(7, hw-1)");
    }
}
