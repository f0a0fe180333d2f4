//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod student_service;
pub mod validation;

pub use student_service::StudentService;
pub use validation::{validate_student, MAX_ZIPCODE, MIN_STUDENT_ID, MIN_ZIPCODE};
