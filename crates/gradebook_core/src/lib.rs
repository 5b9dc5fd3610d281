//! Core domain logic for the gradebook.
//! This crate is the single source of truth for student, homework and grade
//! invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use config::{ConfigError, StorageConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::grade::{Grade, GradeKey};
pub use model::homework::{Homework, HomeworkId};
pub use model::student::{Student, StudentId};
pub use model::Entity;
pub use repo::codec::{Codec, CodecError, JsonCodec};
pub use repo::file_repo::FileRepository;
pub use repo::{RepoError, RepoResult, Repository};
pub use service::gradebook_service::{
    open_file_service, FileService, Service, ServiceError, ServiceResult,
};
pub use service::outcome::{DeleteOutcome, GradeSaveOutcome, SaveOutcome};
pub use validation::{
    GradeValidator, HomeworkValidator, StudentValidator, ValidationError, Validator, Violation,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
