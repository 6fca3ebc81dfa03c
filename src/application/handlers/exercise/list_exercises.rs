//! ListExercisesHandler - Query handler for a user's exercise library.

use std::sync::Arc;

use crate::application::handlers::require_identity;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::workout::WorkoutError;
use crate::ports::{ExerciseReader, ExerciseRecord};

/// Handler listing the exercise library, ordered by name.
pub struct ListExercisesHandler {
    reader: Arc<dyn ExerciseReader>,
}

impl ListExercisesHandler {
    pub fn new(reader: Arc<dyn ExerciseReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<ExerciseRecord>, WorkoutError> {
        let user = require_identity(user)?;
        Ok(self.reader.list_by_user(&user.id).await?)
    }
}
