//! Application handlers.
//!
//! Query handlers that orchestrate reads through the ports. Every handler
//! takes the verified identity as an explicit `Option<&AuthenticatedUser>`
//! argument supplied by the serving layer.

pub mod exercise;
pub mod workout;

pub use exercise::{GetExerciseHandler, GetExerciseQuery, ListExercisesHandler};
pub use workout::{
    DayQuery, GetDaySummaryHandler, GetDayWorkoutsHandler, GetWorkoutHandler, GetWorkoutQuery,
    ListWorkoutsHandler,
};

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::workout::WorkoutError;

/// Unwraps the verified identity or fails with `Unauthorized`.
pub(crate) fn require_identity(
    user: Option<&AuthenticatedUser>,
) -> Result<&AuthenticatedUser, WorkoutError> {
    user.ok_or_else(|| {
        tracing::debug!("Rejected query without verified identity");
        WorkoutError::Unauthorized
    })
}
