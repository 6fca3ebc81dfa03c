//! GetDaySummaryHandler - Query handler for the condensed day cards.

use std::sync::Arc;

use super::get_day_workouts::{DayQuery, GetDayWorkoutsHandler};
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::workout::{summarize, WorkoutError, WorkoutSummary};
use crate::ports::WorkoutReader;

/// Handler summarizing one day: display names, set counts and reps.
///
/// Built on the full day tree, so identity, boundary and ordering rules are
/// the same as for [`GetDayWorkoutsHandler`].
pub struct GetDaySummaryHandler {
    day: GetDayWorkoutsHandler,
}

impl GetDaySummaryHandler {
    pub fn new(reader: Arc<dyn WorkoutReader>) -> Self {
        Self {
            day: GetDayWorkoutsHandler::new(reader),
        }
    }

    pub async fn handle(
        &self,
        user: Option<&AuthenticatedUser>,
        query: DayQuery,
    ) -> Result<Vec<WorkoutSummary>, WorkoutError> {
        let workouts = self.day.handle(user, query).await?;
        Ok(summarize(&workouts))
    }

    /// Dashboard variant: anonymous callers get an empty summary.
    pub async fn handle_allowing_guest(
        &self,
        user: Option<&AuthenticatedUser>,
        query: DayQuery,
    ) -> Result<Vec<WorkoutSummary>, WorkoutError> {
        let workouts = self.day.handle_allowing_guest(user, query).await?;
        Ok(summarize(&workouts))
    }
}
