//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the student/homework/grade repositories into use-case APIs.
//! - Enforce cross-record rules (grade references must resolve).
//! - Keep CLI callers decoupled from storage details.

pub mod gradebook_service;
pub mod outcome;
