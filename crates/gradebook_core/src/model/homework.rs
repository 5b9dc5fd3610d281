//! Homework assignment record.
//!
//! # Invariants
//! - `startline` and `deadline` are teaching-week numbers.
//! - `startline <= deadline` for every valid assignment.

use super::Entity;
use serde::{Deserialize, Serialize};

pub type HomeworkId = String;

/// A homework assignment open between two teaching weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub id: HomeworkId,
    pub description: String,
    /// Last week in which the homework can be handed in.
    pub deadline: i32,
    /// Week in which the homework is published.
    pub startline: i32,
}

impl Homework {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        deadline: i32,
        startline: i32,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            deadline,
            startline,
        }
    }
}

impl Entity for Homework {
    type Id = HomeworkId;

    const KIND: &'static str = "homework";

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
