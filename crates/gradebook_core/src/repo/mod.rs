//! Repository contract and file-backed persistence.
//!
//! # Responsibility
//! - Define one CRUD contract shared by every record type.
//! - Keep file format and I/O details out of the service layer.
//!
//! # Invariants
//! - Write paths validate records before any mutation.
//! - "Missing" and "already present" are `Option` results, never errors.
//! - Storage failures surface as `RepoError`; nothing is retried.

pub mod codec;
pub mod file_repo;

use crate::model::Entity;
use crate::validation::ValidationError;
use codec::CodecError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for validation, I/O and decoding failures.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Codec(CodecError),
    /// Backing file decoded but holds records that break store invariants.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "storage I/O failed for `{}`: {source}", path.display())
            }
            Self::Codec(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Codec(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CodecError> for RepoError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

/// CRUD contract for one record type.
///
/// Implementations must keep `find_all` in insertion order and must never
/// overwrite an existing record on `save`.
pub trait Repository<E: Entity> {
    /// Looks up one record; `Ok(None)` on a miss.
    fn find_one(&self, id: &E::Id) -> RepoResult<Option<E>>;

    /// Snapshot of every stored record in insertion order.
    fn find_all(&self) -> RepoResult<Vec<E>>;

    /// Validates and inserts `entity`.
    ///
    /// Returns `Ok(None)` when inserted, or `Ok(Some(existing))` when a record
    /// with the same id is already stored (the store is left unchanged).
    fn save(&mut self, entity: E) -> RepoResult<Option<E>>;

    /// Removes a record; returns it, or `Ok(None)` when no record matched.
    fn delete(&mut self, id: &E::Id) -> RepoResult<Option<E>>;
}
