//! GetExerciseHandler - Query handler for a single exercise.

use std::sync::Arc;

use crate::application::handlers::require_identity;
use crate::domain::foundation::{AuthenticatedUser, ExerciseId};
use crate::domain::workout::WorkoutError;
use crate::ports::{ExerciseReader, ExerciseRecord};

/// Query to get an exercise by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetExerciseQuery {
    pub exercise_id: ExerciseId,
}

/// Handler for retrieving one exercise of the caller's library.
pub struct GetExerciseHandler {
    reader: Arc<dyn ExerciseReader>,
}

impl GetExerciseHandler {
    pub fn new(reader: Arc<dyn ExerciseReader>) -> Self {
        Self { reader }
    }

    /// `None` for missing and for foreign exercises alike.
    pub async fn handle(
        &self,
        user: Option<&AuthenticatedUser>,
        query: GetExerciseQuery,
    ) -> Result<Option<ExerciseRecord>, WorkoutError> {
        let user = require_identity(user)?;
        Ok(self.reader.find_for_user(&user.id, query.exercise_id).await?)
    }
}
