//! In-memory adapters
//!
//! Implementations of repository traits backed by process memory.

pub mod student_repo;

pub use student_repo::InMemoryStudentRepository;
