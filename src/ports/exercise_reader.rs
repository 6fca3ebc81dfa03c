//! Exercise reader port.
//!
//! Read access to a user's personal exercise library.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ExerciseId, OwnedByUser, UserId};

/// Reader port for the exercise library.
#[async_trait]
pub trait ExerciseReader: Send + Sync {
    /// All exercises in the user's library, ordered by name then id.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ExerciseRecord>, DomainError>;

    /// One exercise by id, `None` when missing or owned by another user.
    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: ExerciseId,
    ) -> Result<Option<ExerciseRecord>, DomainError>;
}

/// An exercise library row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub id: ExerciseId,
    pub user_id: UserId,
    pub name: String,
}

impl OwnedByUser for ExerciseRecord {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}
