//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, authentication types and error
//! types that form the vocabulary of the workout log domain.

mod auth;
mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ExerciseId, SetId, UserId, WorkoutExerciseId, WorkoutId};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;
