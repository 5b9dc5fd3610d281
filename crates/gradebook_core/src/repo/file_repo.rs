//! Generic file-backed repository.
//!
//! # Responsibility
//! - Hold every record of one kind in memory, in insertion order.
//! - Rewrite the whole backing file synchronously after each mutation.
//!
//! # Invariants
//! - Records are validated before insert and again when loaded from disk.
//! - Ids are unique within one file; duplicates on load are rejected.
//! - When persisting fails, the in-memory change is rolled back.
//!
//! # Concurrency
//! - Single-process, single-threaded access only. Two repositories (or two
//!   processes) bound to the same path race on the file with no protection.
//!   Callers that need shared access must serialize through one owner, e.g.
//!   a mutex per file.

use super::codec::{Codec, JsonCodec};
use super::{RepoError, RepoResult, Repository};
use crate::model::Entity;
use crate::validation::Validator;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Repository for records of kind `E`, stored in one file encoded by `C`.
pub struct FileRepository<E, V, C = JsonCodec> {
    path: PathBuf,
    validator: V,
    codec: C,
    records: Vec<E>,
}

impl<E, V> FileRepository<E, V, JsonCodec>
where
    E: Entity,
    V: Validator<E>,
{
    /// Opens a JSON-backed repository at `path`.
    ///
    /// A missing or empty file opens as an empty store; the file is created
    /// on the first successful mutation.
    pub fn open(path: impl AsRef<Path>, validator: V) -> RepoResult<Self> {
        Self::open_with_codec(path, validator, JsonCodec)
    }
}

impl<E, V, C> FileRepository<E, V, C>
where
    E: Entity,
    V: Validator<E>,
    C: Codec<E>,
{
    /// Opens a repository at `path` using a caller-provided codec.
    ///
    /// # Errors
    /// - `RepoError::Io` when the file exists but cannot be read.
    /// - `RepoError::Codec` when the file content cannot be decoded.
    /// - `RepoError::InvalidData` when a stored record fails validation or
    ///   an id appears twice.
    pub fn open_with_codec(path: impl AsRef<Path>, validator: V, codec: C) -> RepoResult<Self> {
        let started_at = Instant::now();
        let path = path.as_ref().to_path_buf();
        info!(
            "event=repo_open module=repo status=start kind={} path={}",
            E::KIND,
            path.display()
        );

        match load_records(&path, &validator, &codec) {
            Ok(records) => {
                info!(
                    "event=repo_open module=repo status=ok kind={} records={} duration_ms={}",
                    E::KIND,
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Self {
                    path,
                    validator,
                    codec,
                    records,
                })
            }
            Err(err) => {
                error!(
                    "event=repo_open module=repo status=error kind={} duration_ms={} error={}",
                    E::KIND,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &E::Id) -> Option<usize> {
        self.records.iter().position(|record| &record.id() == id)
    }

    fn persist(&self) -> RepoResult<()> {
        let bytes = self.codec.encode(&self.records)?;

        // Write next to the target, then rename, so a crash mid-write leaves
        // the previous file intact.
        let mut tmp_name = OsString::from(self.path.as_os_str());
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        std::fs::write(&tmp_path, &bytes).map_err(|source| RepoError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        if let Err(source) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(RepoError::Io {
                path: self.path.clone(),
                source,
            });
        }

        debug!(
            "event=repo_persist module=repo status=ok kind={} records={} bytes={}",
            E::KIND,
            self.records.len(),
            bytes.len()
        );
        Ok(())
    }
}

impl<E, V, C> Repository<E> for FileRepository<E, V, C>
where
    E: Entity,
    V: Validator<E>,
    C: Codec<E>,
{
    fn find_one(&self, id: &E::Id) -> RepoResult<Option<E>> {
        Ok(self
            .position(id)
            .map(|index| self.records[index].clone()))
    }

    fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, entity: E) -> RepoResult<Option<E>> {
        if let Err(err) = self.validator.validate(&entity) {
            info!(
                "event=repo_save module=repo status=rejected kind={} error={}",
                E::KIND,
                err
            );
            return Err(err.into());
        }

        let id = entity.id();
        if let Some(index) = self.position(&id) {
            info!(
                "event=repo_save module=repo status=conflict kind={} id={}",
                E::KIND,
                id
            );
            return Ok(Some(self.records[index].clone()));
        }

        self.records.push(entity);
        if let Err(err) = self.persist() {
            self.records.pop();
            error!(
                "event=repo_save module=repo status=error kind={} id={} error={}",
                E::KIND,
                id,
                err
            );
            return Err(err);
        }

        info!(
            "event=repo_save module=repo status=ok kind={} id={}",
            E::KIND,
            id
        );
        Ok(None)
    }

    fn delete(&mut self, id: &E::Id) -> RepoResult<Option<E>> {
        let Some(index) = self.position(id) else {
            debug!(
                "event=repo_delete module=repo status=miss kind={} id={}",
                E::KIND,
                id
            );
            return Ok(None);
        };

        let removed = self.records.remove(index);
        if let Err(err) = self.persist() {
            self.records.insert(index, removed);
            error!(
                "event=repo_delete module=repo status=error kind={} id={} error={}",
                E::KIND,
                id,
                err
            );
            return Err(err);
        }

        info!(
            "event=repo_delete module=repo status=ok kind={} id={}",
            E::KIND,
            id
        );
        Ok(Some(removed))
    }
}

fn load_records<E, V, C>(path: &Path, validator: &V, codec: &C) -> RepoResult<Vec<E>>
where
    E: Entity,
    V: Validator<E>,
    C: Codec<E>,
{
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(
                "event=repo_open module=repo status=missing_file kind={} path={}",
                E::KIND,
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(RepoError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let records = codec.decode(&bytes)?;
    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        let id = record.id();
        validator.validate(record).map_err(|err| {
            RepoError::InvalidData(format!("{} `{id}` in `{}`: {err}", E::KIND, path.display()))
        })?;
        if !seen.insert(id.clone()) {
            return Err(RepoError::InvalidData(format!(
                "duplicate {} id `{id}` in `{}`",
                E::KIND,
                path.display()
            )));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::FileRepository;
    use crate::model::student::Student;
    use crate::repo::Repository;
    use crate::validation::StudentValidator;

    #[test]
    fn failed_persist_rolls_back_insert() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("students.json");
        let mut repo: FileRepository<Student, _> =
            FileRepository::open(&path, StudentValidator).unwrap();

        assert!(repo.save(Student::new("1", "Ana", 221)).is_err());
        assert!(repo.is_empty());
        assert!(repo.find_one(&"1".to_string()).unwrap().is_none());
    }

    #[test]
    fn failed_rename_removes_temp_file_and_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let mut repo: FileRepository<Student, _> =
            FileRepository::open(&path, StudentValidator).unwrap();
        // A directory at the target path makes the rename fail.
        std::fs::create_dir(&path).unwrap();

        assert!(repo.save(Student::new("1", "Ana", 221)).is_err());
        assert!(repo.is_empty());
        assert!(!dir.path().join("students.json.tmp").exists());
    }

    #[test]
    fn no_temp_file_is_left_after_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let mut repo: FileRepository<Student, _> =
            FileRepository::open(&path, StudentValidator).unwrap();

        repo.save(Student::new("1", "Ana", 221)).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("students.json.tmp").exists());
    }
}
