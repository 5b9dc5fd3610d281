//! Gradebook use-case service.
//!
//! # Responsibility
//! - Build records from caller input and validate them before storage.
//! - Resolve grade references against the student and homework stores.
//! - Translate repository `Option` results into typed outcomes.
//!
//! # Invariants
//! - Invalid input fails with `ServiceError::Validation` before any
//!   repository call.
//! - `save_grade` checks the student first and skips the homework lookup
//!   when the student is missing.
//! - Deleting a student or homework never touches stored grades.

use super::outcome::{DeleteOutcome, GradeSaveOutcome, SaveOutcome};
use crate::config::{ConfigError, StorageConfig};
use crate::model::grade::{Grade, GradeKey};
use crate::model::homework::Homework;
use crate::model::student::Student;
use crate::repo::file_repo::FileRepository;
use crate::repo::{RepoError, Repository};
use crate::validation::{
    GradeValidator, HomeworkValidator, StudentValidator, ValidationError, Validator,
};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for contract violations and storage faults.
///
/// Business outcomes (duplicates, misses) are never reported here.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input breaks record field constraints.
    Validation(ValidationError),
    /// A required argument was missing (caller bug, not a data problem).
    InvalidArgument(&'static str),
    /// Storage configuration is unusable.
    Config(ConfigError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidArgument(name) => write!(f, "missing required argument `{name}`"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidArgument(_) => None,
            Self::Config(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ConfigError> for ServiceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Service over file-backed JSON repositories.
pub type FileService = Service<
    FileRepository<Student, StudentValidator>,
    FileRepository<Homework, HomeworkValidator>,
    FileRepository<Grade, GradeValidator>,
>;

/// Opens the three file repositories described by `config`.
///
/// Creates the data directory when it does not exist yet.
pub fn open_file_service(config: &StorageConfig) -> ServiceResult<FileService> {
    config.validate()?;
    config.ensure_data_dir()?;

    let students = FileRepository::open(config.students_path(), StudentValidator)?;
    let homework = FileRepository::open(config.homework_path(), HomeworkValidator)?;
    let grades = FileRepository::open(config.grades_path(), GradeValidator)?;

    info!(
        "event=service_open module=service status=ok data_dir={}",
        config.data_dir().display()
    );
    Ok(Service::new(students, homework, grades))
}

/// Use-case facade over the student, homework and grade repositories.
pub struct Service<S, H, G> {
    students: S,
    homework: H,
    grades: G,
}

impl<S, H, G> Service<S, H, G>
where
    S: Repository<Student>,
    H: Repository<Homework>,
    G: Repository<Grade>,
{
    /// Creates a service from injected repository implementations.
    pub fn new(students: S, homework: H, grades: G) -> Self {
        Self {
            students,
            homework,
            grades,
        }
    }

    pub fn students(&self) -> &S {
        &self.students
    }

    pub fn homework(&self) -> &H {
        &self.homework
    }

    pub fn grades(&self) -> &G {
        &self.grades
    }

    /// Registers a new student.
    ///
    /// # Contract
    /// - `Inserted` (code 1) when the id was unseen.
    /// - `AlreadyExists` (code 0) when a student with that id is stored; the
    ///   stored record is not overwritten.
    /// - Fails with `ServiceError::Validation` before touching storage when a
    ///   field is invalid.
    pub fn save_student(&mut self, id: &str, name: &str, group: i32) -> ServiceResult<SaveOutcome> {
        let student = Student::new(id, name, group);
        StudentValidator.validate(&student)?;

        let outcome = match self.students.save(student)? {
            None => SaveOutcome::Inserted,
            Some(_) => SaveOutcome::AlreadyExists,
        };
        debug!(
            "event=save_student module=service status=ok outcome={:?} id={}",
            outcome, id
        );
        Ok(outcome)
    }

    /// Removes a student by id.
    ///
    /// # Contract
    /// - `None` is a caller bug and fails with `ServiceError::InvalidArgument`.
    /// - Any other id (including empty or blank) is looked up as is:
    ///   `Removed` (code 1) or `NotFound` (code 0).
    /// - Grades of the removed student are kept.
    pub fn delete_student(&mut self, id: Option<&str>) -> ServiceResult<DeleteOutcome> {
        let id = id.ok_or(ServiceError::InvalidArgument("id"))?;
        let outcome = match self.students.delete(&id.to_string())? {
            Some(_) => DeleteOutcome::Removed,
            None => DeleteOutcome::NotFound,
        };
        debug!(
            "event=delete_student module=service status=ok outcome={:?} id={}",
            outcome, id
        );
        Ok(outcome)
    }

    /// Lists all students in insertion order.
    pub fn find_all_students(&self) -> ServiceResult<Vec<Student>> {
        Ok(self.students.find_all()?)
    }

    pub fn find_student(&self, id: &str) -> ServiceResult<Option<Student>> {
        Ok(self.students.find_one(&id.to_string())?)
    }

    /// Registers a new homework assignment.
    ///
    /// Same codes as `save_student`: 1 inserted, 0 already present.
    pub fn save_homework(
        &mut self,
        id: &str,
        description: &str,
        deadline: i32,
        startline: i32,
    ) -> ServiceResult<SaveOutcome> {
        let homework = Homework::new(id, description, deadline, startline);
        HomeworkValidator.validate(&homework)?;

        let outcome = match self.homework.save(homework)? {
            None => SaveOutcome::Inserted,
            Some(_) => SaveOutcome::AlreadyExists,
        };
        debug!(
            "event=save_homework module=service status=ok outcome={:?} id={}",
            outcome, id
        );
        Ok(outcome)
    }

    /// Removes a homework by id. Same contract as `delete_student`.
    pub fn delete_homework(&mut self, id: Option<&str>) -> ServiceResult<DeleteOutcome> {
        let id = id.ok_or(ServiceError::InvalidArgument("id"))?;
        let outcome = match self.homework.delete(&id.to_string())? {
            Some(_) => DeleteOutcome::Removed,
            None => DeleteOutcome::NotFound,
        };
        debug!(
            "event=delete_homework module=service status=ok outcome={:?} id={}",
            outcome, id
        );
        Ok(outcome)
    }

    pub fn find_all_homework(&self) -> ServiceResult<Vec<Homework>> {
        Ok(self.homework.find_all()?)
    }

    pub fn find_homework(&self, id: &str) -> ServiceResult<Option<Homework>> {
        Ok(self.homework.find_one(&id.to_string())?)
    }

    /// Records a grade for an existing student and homework.
    ///
    /// # Contract
    /// - `MissingReference` (code -1) when the student is unknown; the
    ///   homework store is not queried in that case.
    /// - `MissingReference` (code -1) when the homework is unknown.
    /// - `Inserted` (code 0) on a fresh insert.
    /// - `AlreadyExists` (code 1) when this pair already has a grade.
    /// - Fails with `ServiceError::Validation` when value or week are out of
    ///   range; the grade store is not touched.
    pub fn save_grade(
        &mut self,
        student_id: &str,
        homework_id: &str,
        value: f64,
        week: i32,
        feedback: &str,
    ) -> ServiceResult<GradeSaveOutcome> {
        if self.students.find_one(&student_id.to_string())?.is_none() {
            info!(
                "event=save_grade module=service status=rejected reason=unknown_student student_id={}",
                student_id
            );
            return Ok(GradeSaveOutcome::MissingReference);
        }
        if self.homework.find_one(&homework_id.to_string())?.is_none() {
            info!(
                "event=save_grade module=service status=rejected reason=unknown_homework homework_id={}",
                homework_id
            );
            return Ok(GradeSaveOutcome::MissingReference);
        }

        let grade = Grade::new(student_id, homework_id, value, week, feedback);
        GradeValidator.validate(&grade)?;

        let outcome = match self.grades.save(grade)? {
            None => GradeSaveOutcome::Inserted,
            Some(_) => GradeSaveOutcome::AlreadyExists,
        };
        debug!(
            "event=save_grade module=service status=ok outcome={:?} student_id={} homework_id={}",
            outcome, student_id, homework_id
        );
        Ok(outcome)
    }

    pub fn find_all_grades(&self) -> ServiceResult<Vec<Grade>> {
        Ok(self.grades.find_all()?)
    }

    pub fn find_grade(&self, student_id: &str, homework_id: &str) -> ServiceResult<Option<Grade>> {
        Ok(self.grades.find_one(&GradeKey::new(student_id, homework_id))?)
    }
}
