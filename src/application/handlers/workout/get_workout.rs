//! GetWorkoutHandler - Query handler for a single workout.

use std::sync::Arc;

use crate::application::handlers::require_identity;
use crate::domain::foundation::{AuthenticatedUser, WorkoutId};
use crate::domain::workout::WorkoutError;
use crate::ports::{WorkoutReader, WorkoutRecord};

/// Query to get a workout by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetWorkoutQuery {
    pub workout_id: WorkoutId,
}

/// Handler for retrieving one workout.
pub struct GetWorkoutHandler {
    reader: Arc<dyn WorkoutReader>,
}

impl GetWorkoutHandler {
    pub fn new(reader: Arc<dyn WorkoutReader>) -> Self {
        Self { reader }
    }

    /// Returns `None` when the workout does not exist or belongs to another
    /// user; the two cases are indistinguishable to the caller.
    pub async fn handle(
        &self,
        user: Option<&AuthenticatedUser>,
        query: GetWorkoutQuery,
    ) -> Result<Option<WorkoutRecord>, WorkoutError> {
        let user = require_identity(user)?;
        Ok(self.reader.find_for_user(&user.id, query.workout_id).await?)
    }
}
