//! Business outcomes of mutating service calls.
//!
//! Outcomes are results, not errors: a duplicate id or a missing reference
//! is an expected branch for callers. `code()` gives the integer status used
//! by the CLI and by older callers.
//!
//! Save codes differ per record kind: a fresh student/homework insert is `1`
//! while a fresh grade insert is `0`. Callers depend on these exact values.

/// Result of saving a student or a homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    /// A record with the same id was already stored; nothing changed.
    AlreadyExists,
}

impl SaveOutcome {
    pub fn code(self) -> i32 {
        match self {
            Self::Inserted => 1,
            Self::AlreadyExists => 0,
        }
    }
}

/// Result of deleting a student or a homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

impl DeleteOutcome {
    pub fn code(self) -> i32 {
        match self {
            Self::Removed => 1,
            Self::NotFound => 0,
        }
    }
}

/// Result of saving a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeSaveOutcome {
    Inserted,
    /// A grade for this (student, homework) pair was already stored.
    AlreadyExists,
    /// The referenced student or homework does not exist.
    MissingReference,
}

impl GradeSaveOutcome {
    pub fn code(self) -> i32 {
        match self {
            Self::Inserted => 0,
            Self::AlreadyExists => 1,
            Self::MissingReference => -1,
        }
    }
}
