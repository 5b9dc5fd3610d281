//! Domain records for the gradebook.
//!
//! # Responsibility
//! - Define the canonical student/homework/grade shapes used by core logic.
//! - Describe how each record is keyed so one generic repository can store it.
//!
//! # Invariants
//! - Every record exposes exactly one stable identifier via `Entity::id`.
//! - Records carry no validation state; checks live in `crate::validation`.

pub mod grade;
pub mod homework;
pub mod student;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record type that can be stored by a repository.
///
/// `KIND` is the stable lower-case name used in persisted documents and log
/// events.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned {
    type Id: Clone + Debug + Display + Eq + Hash;

    const KIND: &'static str;

    fn id(&self) -> Self::Id;
}
