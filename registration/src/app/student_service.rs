//! Student service
//!
//! Validates students before any write reaches the repository, and passes
//! reads straight through.

use std::sync::Arc;

use crate::app::validation::validate_student;
use crate::domain::entities::Student;
use crate::domain::ports::StudentRepository;
use crate::error::{AppError, ArgumentError};

/// Service for registering and maintaining students
pub struct StudentService<SR>
where
    SR: StudentRepository,
{
    students: Arc<SR>,
}

impl<SR> StudentService<SR>
where
    SR: StudentRepository,
{
    pub fn new(students: Option<Arc<SR>>) -> Result<Self, ArgumentError> {
        let students = students.ok_or(ArgumentError::MissingRepository)?;
        Ok(Self { students })
    }

    /// Register a new student
    pub fn add_student(&self, student: Option<Student>) -> Result<(), AppError> {
        let student = checked(student)?;

        self.students.add(student)?;
        Ok(())
    }

    /// Replace an existing student's details
    pub fn update_student(&self, student: Option<Student>) -> Result<(), AppError> {
        let student = checked(student)?;

        if self.students.get_by_id(student.id)?.is_none() {
            tracing::warn!(student_id = student.id, "Update rejected: unknown id");
            return Err(ArgumentError::StudentIdDoesNotExist.into());
        }

        tracing::debug!(student_id = student.id, "Updating student");
        self.students.update(student)?;
        Ok(())
    }

    /// Remove a student, matched by id
    pub fn remove_student(&self, student: Option<Student>) -> Result<(), AppError> {
        let student = student.ok_or(ArgumentError::StudentMissing)?;

        if self.students.get_by_id(student.id)?.is_none() {
            tracing::warn!(student_id = student.id, "Remove rejected: unknown id");
            return Err(ArgumentError::StudentDoesNotExist.into());
        }

        tracing::debug!(student_id = student.id, "Removing student");
        self.students.delete(&student)?;
        Ok(())
    }

    /// List all students
    pub fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.students.get_all()?)
    }

    /// Find a student by id
    pub fn get_student_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        Ok(self.students.get_by_id(id)?)
    }
}

/// Presence check plus field validation shared by add and update
fn checked(student: Option<Student>) -> Result<Student, ArgumentError> {
    let student = student.ok_or(ArgumentError::StudentMissing)?;

    if let Err(e) = validate_student(&student) {
        tracing::warn!(student_id = student.id, error = %e, "Student rejected");
        return Err(e);
    }

    tracing::debug!(student_id = student.id, "Student accepted");
    Ok(student)
}
