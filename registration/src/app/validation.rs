//! Student field validation
//!
//! Rules are checked in a fixed order and the first failure wins:
//! id, name, address, zipcode, city, email.

use crate::domain::entities::Student;
use crate::error::ArgumentError;

/// Lowest id accepted for write operations
pub const MIN_STUDENT_ID: i32 = 1;

/// Lowest accepted zipcode (inclusive)
pub const MIN_ZIPCODE: i32 = 1;

/// Highest accepted zipcode (inclusive)
pub const MAX_ZIPCODE: i32 = 9999;

/// Check every field rule, returning the first one that fails
pub fn validate_student(student: &Student) -> Result<(), ArgumentError> {
    if student.id < MIN_STUDENT_ID {
        return Err(ArgumentError::InvalidId);
    }
    if is_blank(&student.name) {
        return Err(ArgumentError::InvalidName);
    }
    if is_blank(&student.address) {
        return Err(ArgumentError::InvalidAddress);
    }
    if !(MIN_ZIPCODE..=MAX_ZIPCODE).contains(&student.zipcode) {
        return Err(ArgumentError::InvalidZipcode);
    }
    if is_blank(&student.city) {
        return Err(ArgumentError::InvalidCity);
    }
    // Absent email is fine, present-but-empty is not
    if matches!(student.email.as_deref(), Some("")) {
        return Err(ArgumentError::InvalidEmail);
    }
    Ok(())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
