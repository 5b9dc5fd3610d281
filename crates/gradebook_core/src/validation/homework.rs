use super::{require_text, require_week, ValidationError, Validator, Violation};
use crate::model::homework::Homework;
use crate::model::Entity;

/// Homework rules: non-blank id and description, both weeks in range,
/// startline not after deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeworkValidator;

impl Validator<Homework> for HomeworkValidator {
    fn validate(&self, entity: &Homework) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "id", &entity.id);
        require_text(&mut violations, "description", &entity.description);
        require_week(&mut violations, "deadline", entity.deadline);
        require_week(&mut violations, "startline", entity.startline);
        if entity.startline > entity.deadline {
            violations.push(Violation::StartlineAfterDeadline {
                startline: entity.startline,
                deadline: entity.deadline,
            });
        }
        ValidationError::check(Homework::KIND, violations)
    }
}
