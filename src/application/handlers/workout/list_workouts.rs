//! ListWorkoutsHandler - Query handler listing all workouts of a user.

use std::sync::Arc;

use crate::application::handlers::require_identity;
use crate::domain::foundation::AuthenticatedUser;
use crate::domain::workout::WorkoutError;
use crate::ports::{WorkoutReader, WorkoutRecord};

/// Handler for the flat workout history (no exercises or sets).
pub struct ListWorkoutsHandler {
    reader: Arc<dyn WorkoutReader>,
}

impl ListWorkoutsHandler {
    pub fn new(reader: Arc<dyn WorkoutReader>) -> Self {
        Self { reader }
    }

    /// Workouts ordered by `started_at`, then id.
    pub async fn handle(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<WorkoutRecord>, WorkoutError> {
        let user = require_identity(user)?;
        Ok(self.reader.list_by_user(&user.id).await?)
    }
}
