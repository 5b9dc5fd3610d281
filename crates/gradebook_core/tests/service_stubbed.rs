//! Service rules checked against scripted in-memory repositories.

use gradebook_core::{
    DeleteOutcome, Entity, Grade, GradeSaveOutcome, Homework, RepoResult, Repository,
    SaveOutcome, Service, ServiceError, Student,
};
use std::cell::Cell;

/// Repository stub that returns scripted answers and counts calls.
struct StubRepository<E: Entity> {
    find_one_result: Option<E>,
    save_result: Option<E>,
    delete_result: Option<E>,
    find_one_calls: Cell<usize>,
    save_calls: usize,
    delete_calls: usize,
    saved: Vec<E>,
}

impl<E: Entity> StubRepository<E> {
    fn new() -> Self {
        Self {
            find_one_result: None,
            save_result: None,
            delete_result: None,
            find_one_calls: Cell::new(0),
            save_calls: 0,
            delete_calls: 0,
            saved: Vec::new(),
        }
    }

    fn finding(mut self, record: E) -> Self {
        self.find_one_result = Some(record);
        self
    }

    fn saving(mut self, previous: E) -> Self {
        self.save_result = Some(previous);
        self
    }

    fn deleting(mut self, removed: E) -> Self {
        self.delete_result = Some(removed);
        self
    }
}

impl<E: Entity> Repository<E> for StubRepository<E> {
    fn find_one(&self, _id: &E::Id) -> RepoResult<Option<E>> {
        self.find_one_calls.set(self.find_one_calls.get() + 1);
        Ok(self.find_one_result.clone())
    }

    fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, entity: E) -> RepoResult<Option<E>> {
        self.save_calls += 1;
        self.saved.push(entity);
        Ok(self.save_result.clone())
    }

    fn delete(&mut self, _id: &E::Id) -> RepoResult<Option<E>> {
        self.delete_calls += 1;
        Ok(self.delete_result.clone())
    }
}

type StubService =
    Service<StubRepository<Student>, StubRepository<Homework>, StubRepository<Grade>>;

fn service(
    students: StubRepository<Student>,
    homework: StubRepository<Homework>,
    grades: StubRepository<Grade>,
) -> StubService {
    Service::new(students, homework, grades)
}

fn empty_service() -> StubService {
    service(
        StubRepository::new(),
        StubRepository::new(),
        StubRepository::new(),
    )
}

fn student() -> Student {
    Student::new("2", "Maria", 222)
}

fn homework() -> Homework {
    Homework::new("2", "Lab 2", 6, 4)
}

#[test]
fn save_student_returns_one_when_repository_inserts() {
    let mut service = empty_service();

    let outcome = service.save_student("3", "student", 500).unwrap();

    assert_eq!(outcome, SaveOutcome::Inserted);
    assert_eq!(outcome.code(), 1);
    assert_eq!(service.students().save_calls, 1);
    assert_eq!(service.students().saved, vec![Student::new("3", "student", 500)]);
}

#[test]
fn save_student_returns_zero_when_repository_reports_existing() {
    let mut service = service(
        StubRepository::new().saving(Student::new("4", "student", 500)),
        StubRepository::new(),
        StubRepository::new(),
    );

    let outcome = service.save_student("4", "student", 500).unwrap();

    assert_eq!(outcome.code(), 0);
    assert_eq!(service.students().save_calls, 1);
}

#[test]
fn save_student_rejects_invalid_input_before_repository() {
    let mut service = empty_service();

    for (id, name, group) in [("", "student", 500), ("3", "", 500), ("3", "student", 0)] {
        let err = service.save_student(id, name, group).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)), "got {err}");
    }
    assert_eq!(service.students().save_calls, 0);
}

#[test]
fn delete_student_returns_one_when_removed() {
    let mut service = service(
        StubRepository::new().deleting(student()),
        StubRepository::new(),
        StubRepository::new(),
    );

    let outcome = service.delete_student(Some("2")).unwrap();

    assert_eq!(outcome, DeleteOutcome::Removed);
    assert_eq!(outcome.code(), 1);
    assert_eq!(service.students().delete_calls, 1);
}

#[test]
fn delete_student_returns_zero_for_unknown_or_malformed_ids() {
    for id in ["", " ", "-1", "5"] {
        let mut service = empty_service();

        let outcome = service.delete_student(Some(id)).unwrap();

        assert_eq!(outcome.code(), 0, "id `{id}`");
        assert_eq!(service.students().delete_calls, 1);
    }
}

#[test]
fn delete_student_without_id_is_a_contract_error() {
    let mut service = empty_service();

    let err = service.delete_student(None).unwrap_err();

    assert!(matches!(err, ServiceError::InvalidArgument("id")));
    assert_eq!(service.students().delete_calls, 0);
}

#[test]
fn save_grade_skips_homework_lookup_when_student_is_missing() {
    let mut both_missing = empty_service();
    let outcome = both_missing.save_grade("2", "2", 7.0, 6, "").unwrap();
    assert_eq!(outcome.code(), -1);
    assert_eq!(both_missing.students().find_one_calls.get(), 1);
    assert_eq!(both_missing.homework().find_one_calls.get(), 0);
    assert_eq!(both_missing.grades().save_calls, 0);

    let mut homework_present = service(
        StubRepository::new(),
        StubRepository::new().finding(homework()),
        StubRepository::new(),
    );
    let outcome = homework_present.save_grade("2", "2", 7.0, 6, "").unwrap();
    assert_eq!(outcome, GradeSaveOutcome::MissingReference);
    assert_eq!(homework_present.students().find_one_calls.get(), 1);
    assert_eq!(homework_present.homework().find_one_calls.get(), 0);
    assert_eq!(homework_present.grades().save_calls, 0);
}

#[test]
fn save_grade_returns_minus_one_when_homework_is_missing() {
    let mut service = service(
        StubRepository::new().finding(student()),
        StubRepository::new(),
        StubRepository::new(),
    );

    let outcome = service.save_grade("2", "2", 7.0, 6, "").unwrap();

    assert_eq!(outcome.code(), -1);
    assert_eq!(service.students().find_one_calls.get(), 1);
    assert_eq!(service.homework().find_one_calls.get(), 1);
    assert_eq!(service.grades().save_calls, 0);
}

#[test]
fn save_grade_returns_zero_on_fresh_insert() {
    let mut service = service(
        StubRepository::new().finding(student()),
        StubRepository::new().finding(homework()),
        StubRepository::new(),
    );

    let outcome = service.save_grade("2", "2", 7.0, 6, "").unwrap();

    assert_eq!(outcome, GradeSaveOutcome::Inserted);
    assert_eq!(outcome.code(), 0);
    assert_eq!(service.students().find_one_calls.get(), 1);
    assert_eq!(service.homework().find_one_calls.get(), 1);
    assert_eq!(service.grades().save_calls, 1);
    assert_eq!(
        service.grades().saved,
        vec![Grade::new("2", "2", 7.0, 6, "")]
    );
}

#[test]
fn save_grade_returns_one_when_grade_exists() {
    let mut service = service(
        StubRepository::new().finding(student()),
        StubRepository::new().finding(homework()),
        StubRepository::new().saving(Grade::new("2", "2", 9.0, 5, "")),
    );

    let outcome = service.save_grade("2", "2", 7.0, 6, "").unwrap();

    assert_eq!(outcome, GradeSaveOutcome::AlreadyExists);
    assert_eq!(outcome.code(), 1);
    assert_eq!(service.grades().save_calls, 1);
}

#[test]
fn save_grade_rejects_invalid_fields_without_saving() {
    let mut service = service(
        StubRepository::new().finding(student()),
        StubRepository::new().finding(homework()),
        StubRepository::new(),
    );

    let err = service.save_grade("2", "2", 11.0, 6, "").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    let err = service.save_grade("2", "2", 7.0, 20, "").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    assert_eq!(service.grades().save_calls, 0);
}

#[test]
fn find_all_students_passes_through() {
    let mut service = empty_service();
    service.save_student("1", "Ana", 221).unwrap();
    service.save_student("2", "Maria", 222).unwrap();

    let ids: Vec<String> = service
        .find_all_students()
        .unwrap()
        .into_iter()
        .map(|student| student.id)
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}
