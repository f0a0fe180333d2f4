//! Unified error types for student registration
//!
//! This module defines error types for each layer:
//! - `ArgumentError`: Rejected caller input, carrying the message shown to users
//! - `DomainError`: Failures reported by repository adapters
//! - `AppError`: Application layer errors returned by services

use thiserror::Error;

/// Caller input that the service refuses to act on
///
/// The `Display` text of each variant is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Missing repository")]
    MissingRepository,

    #[error("Student is missing")]
    StudentMissing,

    #[error("Invalid id")]
    InvalidId,

    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid address")]
    InvalidAddress,

    #[error("Invalid zipcode")]
    InvalidZipcode,

    #[error("Invalid city")]
    InvalidCity,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Student id does not exist")]
    StudentIdDoesNotExist,

    #[error("Student does not exist")]
    StudentDoesNotExist,
}

/// Domain layer errors raised by repository implementations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application layer errors - returned by service operations
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

impl AppError {
    /// The rejected-input reason, if this is an argument error
    pub fn argument(&self) -> Option<ArgumentError> {
        match self {
            AppError::Argument(e) => Some(*e),
            AppError::Domain(_) => None,
        }
    }
}
