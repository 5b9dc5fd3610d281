//! Student record.

use super::Entity;
use serde::{Deserialize, Serialize};

/// Student identifier as entered by the caller (e.g. a matriculation number).
pub type StudentId = String;

/// An enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Study group number. Must be positive.
    pub group: i32,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group,
        }
    }
}

impl Entity for Student {
    type Id = StudentId;

    const KIND: &'static str = "student";

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
