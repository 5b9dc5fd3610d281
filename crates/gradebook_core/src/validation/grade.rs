use super::{require_text, require_week, ValidationError, Validator, Violation};
use super::{MAX_GRADE, MIN_GRADE};
use crate::model::grade::Grade;
use crate::model::Entity;

/// Grade rules: both references non-blank, value on the grading scale,
/// delivery week in range. Feedback is free text and never checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeValidator;

impl Validator<Grade> for GradeValidator {
    fn validate(&self, entity: &Grade) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "student_id", &entity.student_id);
        require_text(&mut violations, "homework_id", &entity.homework_id);
        // NaN fails the range check too.
        if !(MIN_GRADE..=MAX_GRADE).contains(&entity.value) {
            violations.push(Violation::GradeOutOfRange {
                value: entity.value,
            });
        }
        require_week(&mut violations, "week", entity.week);
        ValidationError::check(Grade::KIND, violations)
    }
}
