//! In-memory adapter for StudentRepository

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{Config, DuplicatePolicy};
use crate::domain::entities::Student;
use crate::domain::ports::StudentRepository;
use crate::error::DomainError;

/// In-memory implementation of StudentRepository
///
/// Students are kept in insertion order. Updates and overwrites keep the
/// original position.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
    duplicate_policy: DuplicatePolicy,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            students: RwLock::default(),
            duplicate_policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(config.duplicate_policy)
    }

    /// Pre-populate with a student, replacing any with the same id
    pub fn with_student(self, student: Student) -> Self {
        if let Ok(mut students) = self.students.write() {
            upsert(&mut students, student);
        }
        self
    }

    /// Pre-populate with several students
    pub fn with_students(self, students: impl IntoIterator<Item = Student>) -> Self {
        students.into_iter().fold(self, Self::with_student)
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    pub fn len(&self) -> usize {
        self.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Student>>, DomainError> {
        self.students
            .read()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Student>>, DomainError> {
        self.students
            .write()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}

fn upsert(students: &mut Vec<Student>, student: Student) {
    match students.iter().position(|s| *s == student) {
        Some(index) => students[index] = student,
        None => students.push(student),
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&self, student: Student) -> Result<(), DomainError> {
        let mut students = self.write()?;
        if students.contains(&student) {
            match self.duplicate_policy {
                DuplicatePolicy::Reject => {
                    return Err(DomainError::AlreadyExists(format!(
                        "Student {} already exists",
                        student.id
                    )));
                }
                DuplicatePolicy::Overwrite => {
                    tracing::debug!(student_id = student.id, "Overwriting existing student");
                }
            }
        }
        upsert(&mut students, student);
        Ok(())
    }

    fn update(&self, student: Student) -> Result<(), DomainError> {
        let mut students = self.write()?;
        match students.iter_mut().find(|s| **s == student) {
            Some(existing) => {
                *existing = student;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Student {} not found",
                student.id
            ))),
        }
    }

    fn delete(&self, student: &Student) -> Result<(), DomainError> {
        let mut students = self.write()?;
        let before = students.len();
        students.retain(|s| s != student);
        if students.len() == before {
            return Err(DomainError::NotFound(format!(
                "Student {} not found",
                student.id
            )));
        }
        Ok(())
    }

    fn get_by_id(&self, id: i32) -> Result<Option<Student>, DomainError> {
        let students = self.read()?;
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Student>, DomainError> {
        Ok(self.read()?.clone())
    }
}
