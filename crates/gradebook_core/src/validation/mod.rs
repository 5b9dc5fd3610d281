//! Field-level validation for gradebook records.
//!
//! # Responsibility
//! - Check one record's own fields, independent of any storage.
//! - Report every violated constraint at once so callers can fix input in one pass.
//!
//! # Invariants
//! - Validators are stateless and side-effect free.
//! - Input is never corrected; invalid records are only rejected.

pub mod grade;
pub mod homework;
pub mod student;

pub use grade::GradeValidator;
pub use homework::HomeworkValidator;
pub use student::StudentValidator;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// First teaching week.
pub const MIN_WEEK: i32 = 1;
/// Last teaching week.
pub const MAX_WEEK: i32 = 14;
pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 10.0;

/// Checks the field constraints of one record type.
pub trait Validator<T> {
    fn validate(&self, entity: &T) -> Result<(), ValidationError>;
}

/// One violated field constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Required text field is empty or whitespace only.
    Blank { field: &'static str },
    /// Numeric field must be strictly positive.
    NotPositive { field: &'static str, value: i32 },
    /// Week number outside `MIN_WEEK..=MAX_WEEK`.
    WeekOutOfRange { field: &'static str, value: i32 },
    /// Grade value outside `MIN_GRADE..=MAX_GRADE` (or not a number).
    GradeOutOfRange { value: f64 },
    /// Homework opens after its own deadline.
    StartlineAfterDeadline { startline: i32, deadline: i32 },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{field} must not be blank"),
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::WeekOutOfRange { field, value } => write!(
                f,
                "{field} must be a week in {MIN_WEEK}..={MAX_WEEK}, got {value}"
            ),
            Self::GradeOutOfRange { value } => write!(
                f,
                "grade value must be in {MIN_GRADE}..={MAX_GRADE}, got {value}"
            ),
            Self::StartlineAfterDeadline {
                startline,
                deadline,
            } => write!(
                f,
                "startline ({startline}) must not be after deadline ({deadline})"
            ),
        }
    }
}

/// Rejection of a record listing all violated constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    kind: &'static str,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Turns a collected violation list into a validation result.
    ///
    /// Returns `Ok(())` when `violations` is empty.
    pub fn check(kind: &'static str, violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { kind, violations })
        }
    }

    /// Record kind that failed validation (`student`, `homework`, `grade`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: ", self.kind)?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

fn require_text(violations: &mut Vec<Violation>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::Blank { field });
    }
}

fn require_week(violations: &mut Vec<Violation>, field: &'static str, value: i32) {
    if !(MIN_WEEK..=MAX_WEEK).contains(&value) {
        violations.push(Violation::WeekOutOfRange { field, value });
    }
}
