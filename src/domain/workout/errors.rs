//! Workout query error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failure of a workout or exercise read.
///
/// Absence of a single record is not an error; lookups return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    /// No verified identity accompanied the call.
    #[error("Authentication required")]
    Unauthorized,

    /// Caller-supplied input (date, offset, id) could not be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The record store failed; nothing is returned.
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),
}

impl WorkoutError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        WorkoutError::InvalidInput(message.into())
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        WorkoutError::StoreUnavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkoutError::Unauthorized => ErrorCode::Unauthorized,
            WorkoutError::InvalidInput(_) => ErrorCode::ValidationFailed,
            WorkoutError::StoreUnavailable(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for WorkoutError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthorized => WorkoutError::Unauthorized,
            ErrorCode::ValidationFailed => WorkoutError::InvalidInput(err.message),
            _ => WorkoutError::StoreUnavailable(err.message),
        }
    }
}

impl From<ValidationError> for WorkoutError {
    fn from(err: ValidationError) -> Self {
        WorkoutError::InvalidInput(err.to_string())
    }
}
