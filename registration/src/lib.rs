//! Student Registration
//!
//! Registration domain for students: the `Student` entity, a repository port
//! for persistence, and a service that validates input before it reaches the
//! repository.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;



pub use adapters::InMemoryStudentRepository;
pub use app::{validate_student, StudentService};
pub use config::{Config, DuplicatePolicy};
pub use domain::entities::Student;
pub use domain::ports::StudentRepository;
pub use error::{AppError, ArgumentError, DomainError};
