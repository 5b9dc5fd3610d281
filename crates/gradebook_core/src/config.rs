//! Storage configuration for the file-backed gradebook.
//!
//! # Responsibility
//! - Describe where each record kind is persisted.
//! - Resolve relative file names under one data directory.
//!
//! # Invariants
//! - Each record kind maps to exactly one file.
//! - Absolute file names are used as given and ignore `data_dir`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_STUDENTS_FILE: &str = "students.json";
pub const DEFAULT_HOMEWORK_FILE: &str = "homework.json";
pub const DEFAULT_GRADES_FILE: &str = "grades.json";

#[derive(Debug)]
pub enum ConfigError {
    /// A configured path is empty.
    EmptyPath(&'static str),
    /// Two record kinds were configured to share one file.
    SharedFile(PathBuf),
    CreateDataDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath(field) => write!(f, "{field} cannot be empty"),
            Self::SharedFile(path) => write!(
                f,
                "`{}` is configured for more than one record kind",
                path.display()
            ),
            Self::CreateDataDir { path, source } => write!(
                f,
                "failed to create data directory `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDataDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// File locations of the three record stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    data_dir: PathBuf,
    students_file: PathBuf,
    homework_file: PathBuf,
    grades_file: PathBuf,
}

impl StorageConfig {
    /// Uses the default file names inside `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            students_file: PathBuf::from(DEFAULT_STUDENTS_FILE),
            homework_file: PathBuf::from(DEFAULT_HOMEWORK_FILE),
            grades_file: PathBuf::from(DEFAULT_GRADES_FILE),
        }
    }

    pub fn with_students_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.students_file = file.into();
        self
    }

    pub fn with_homework_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.homework_file = file.into();
        self
    }

    pub fn with_grades_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.grades_file = file.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    pub fn homework_path(&self) -> PathBuf {
        self.data_dir.join(&self.homework_file)
    }

    pub fn grades_path(&self) -> PathBuf {
        self.data_dir.join(&self.grades_file)
    }

    /// Rejects empty paths and files shared between record kinds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("data_dir"));
        }
        for (field, file) in [
            ("students_file", &self.students_file),
            ("homework_file", &self.homework_file),
            ("grades_file", &self.grades_file),
        ] {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::EmptyPath(field));
            }
        }

        let students = self.students_path();
        let homework = self.homework_path();
        let grades = self.grades_path();
        if students == homework || students == grades {
            return Err(ConfigError::SharedFile(students));
        }
        if homework == grades {
            return Err(ConfigError::SharedFile(homework));
        }
        Ok(())
    }

    /// Creates `data_dir` (and parents) when missing.
    pub fn ensure_data_dir(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|source| ConfigError::CreateDataDir {
            path: self.data_dir.clone(),
            source,
        })
    }
}
