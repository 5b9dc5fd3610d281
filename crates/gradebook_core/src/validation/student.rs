use super::{require_text, ValidationError, Validator, Violation};
use crate::model::student::Student;
use crate::model::Entity;

/// Student rules: non-blank id and name, positive group.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentValidator;

impl Validator<Student> for StudentValidator {
    fn validate(&self, entity: &Student) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "id", &entity.id);
        require_text(&mut violations, "name", &entity.name);
        if entity.group <= 0 {
            violations.push(Violation::NotPositive {
                field: "group",
                value: entity.group,
            });
        }
        ValidationError::check(Student::KIND, violations)
    }
}
