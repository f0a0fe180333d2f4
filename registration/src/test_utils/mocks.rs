//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use std::sync::{Arc, Mutex};

use crate::adapters::InMemoryStudentRepository;
use crate::domain::entities::Student;
use crate::domain::ports::StudentRepository;
use crate::error::DomainError;

// ============================================================================
// Recording Student Repository
// ============================================================================

/// A single call made against the repository
#[derive(Debug, Clone)]
pub enum RepoCall {
    Add(Student),
    Update(Student),
    Delete(Student),
    GetById(i32),
    GetAll,
}

/// In-memory student store that records every call made against it
#[derive(Default)]
pub struct RecordingStudentRepository {
    store: InMemoryStudentRepository,
    calls: Arc<Mutex<Vec<RepoCall>>>,
    fail_writes: bool,
}

impl RecordingStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose writes all fail with a storage error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a student for testing. Not recorded as a call.
    pub fn with_student(mut self, student: Student) -> Self {
        self.store = self.store.with_student(student);
        self
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Students passed to `add`, in call order
    pub fn added(&self) -> Vec<Student> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RepoCall::Add(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Students passed to `update`, in call order
    pub fn updated(&self) -> Vec<Student> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RepoCall::Update(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Students passed to `delete`, in call order
    pub fn deleted(&self) -> Vec<Student> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RepoCall::Delete(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Current contents of the backing store
    pub fn stored(&self) -> Vec<Student> {
        self.store.get_all().unwrap()
    }

    fn record(&self, call: RepoCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::Storage("simulated failure".to_string()));
        }
        Ok(())
    }
}

impl StudentRepository for RecordingStudentRepository {
    fn add(&self, student: Student) -> Result<(), DomainError> {
        self.record(RepoCall::Add(student.clone()));
        self.check_writable()?;
        self.store.add(student)
    }

    fn update(&self, student: Student) -> Result<(), DomainError> {
        self.record(RepoCall::Update(student.clone()));
        self.check_writable()?;
        self.store.update(student)
    }

    fn delete(&self, student: &Student) -> Result<(), DomainError> {
        self.record(RepoCall::Delete(student.clone()));
        self.check_writable()?;
        self.store.delete(student)
    }

    fn get_by_id(&self, id: i32) -> Result<Option<Student>, DomainError> {
        self.record(RepoCall::GetById(id));
        self.store.get_by_id(id)
    }

    fn get_all(&self) -> Result<Vec<Student>, DomainError> {
        self.record(RepoCall::GetAll);
        self.store.get_all()
    }
}
