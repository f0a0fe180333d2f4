//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., in-memory).

use crate::domain::entities::Student;
use crate::error::DomainError;

/// Repository for Student entities
#[cfg_attr(test, mockall::automock)]
pub trait StudentRepository: Send + Sync {
    /// Store a new student
    fn add(&self, student: Student) -> Result<(), DomainError>;

    /// Replace the stored student with the same id
    fn update(&self, student: Student) -> Result<(), DomainError>;

    /// Remove the stored student with the same id
    fn delete(&self, student: &Student) -> Result<(), DomainError>;

    /// Find a student by id. A missing id is `Ok(None)`, never an error.
    fn get_by_id(&self, id: i32) -> Result<Option<Student>, DomainError>;

    /// List all stored students
    fn get_all(&self) -> Result<Vec<Student>, DomainError>;
}
