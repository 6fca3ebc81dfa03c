//! Workout reader port (read side).
//!
//! Defines the contract for the read-only queries the workout views are
//! assembled from: the user's workouts, each workout's exercise placements
//! and each placement's sets.
//!
//! # Contract
//!
//! - Every query is scoped by the owning user. Placement and set queries
//!   only return rows reachable through a workout owned by `user_id`.
//! - Placements come back ascending by `order`, sets ascending by
//!   `set_number`, workouts ascending by `started_at` then `id`.
//! - Store failures surface as `DomainError` with `ErrorCode::DatabaseError`;
//!   they are never turned into empty results.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ExerciseId, OwnedByUser, SetId, Timestamp, UserId, WorkoutExerciseId, WorkoutId,
};
use crate::domain::workout::DayRange;

/// Reader port for workout queries.
#[async_trait]
pub trait WorkoutReader: Send + Sync {
    /// All workouts owned by the user.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WorkoutRecord>, DomainError>;

    /// Workouts owned by the user whose `started_at` falls inside `range`.
    async fn list_started_within(
        &self,
        user_id: &UserId,
        range: &DayRange,
    ) -> Result<Vec<WorkoutRecord>, DomainError>;

    /// One workout by id, `None` when it does not exist or is not owned by
    /// the user.
    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: WorkoutId,
    ) -> Result<Option<WorkoutRecord>, DomainError>;

    /// Exercise placements of one workout, joined with the exercise name.
    async fn list_placements(
        &self,
        user_id: &UserId,
        workout_id: WorkoutId,
    ) -> Result<Vec<PlacementRecord>, DomainError>;

    /// Sets logged against one placement.
    async fn list_sets(
        &self,
        user_id: &UserId,
        workout_exercise_id: WorkoutExerciseId,
    ) -> Result<Vec<SetRecord>, DomainError>;
}

/// A workout row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: WorkoutId,
    pub user_id: UserId,
    pub name: Option<String>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl OwnedByUser for WorkoutRecord {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

/// A workout-exercise placement row joined with its exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub id: WorkoutExerciseId,
    pub workout_id: WorkoutId,
    pub exercise_id: ExerciseId,
    pub exercise_name: String,
    pub order: i32,
}

/// A set row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRecord {
    pub id: SetId,
    pub workout_exercise_id: WorkoutExerciseId,
    pub set_number: i32,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
}
