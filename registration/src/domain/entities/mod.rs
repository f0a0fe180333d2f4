//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod student;

pub use student::{Student, UNSET_STUDENT_ID};
