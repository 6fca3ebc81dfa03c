//! Condensed day view for dashboard cards.
//!
//! This is the one place where absent values are replaced by defaults:
//!
//! | value                      | default                 |
//! |----------------------------|-------------------------|
//! | workout name               | [`DEFAULT_WORKOUT_NAME`] |
//! | exercise reps (no sets, or first set without reps) | [`DEFAULT_REPS`] |
//!
//! The full [`WorkoutView`] keeps every optional value as `None`.

use serde::{Deserialize, Serialize};

use super::view::{ExerciseView, WorkoutView};
use crate::domain::foundation::{ExerciseId, Timestamp, WorkoutId};

/// Display name for a workout logged without a name.
pub const DEFAULT_WORKOUT_NAME: &str = "Workout";

/// Reps shown for an exercise whose first set has no reps recorded.
pub const DEFAULT_REPS: i32 = 0;

/// One dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub id: WorkoutId,
    pub name: String,
    pub started_at: Timestamp,
    pub exercises: Vec<ExerciseSummary>,
}

/// One line on a dashboard card: "<name>  <set_count> sets × <reps> reps".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub id: ExerciseId,
    pub name: String,
    pub set_count: usize,
    pub reps: i32,
}

impl From<&WorkoutView> for WorkoutSummary {
    fn from(view: &WorkoutView) -> Self {
        Self {
            id: view.id,
            name: view
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_WORKOUT_NAME.to_string()),
            started_at: view.started_at,
            exercises: view.exercises.iter().map(ExerciseSummary::from).collect(),
        }
    }
}

impl From<&ExerciseView> for ExerciseSummary {
    fn from(view: &ExerciseView) -> Self {
        Self {
            id: view.exercise_id,
            name: view.name.clone(),
            set_count: view.sets.len(),
            // sets are already in set_number order
            reps: view
                .sets
                .first()
                .and_then(|s| s.reps)
                .unwrap_or(DEFAULT_REPS),
        }
    }
}

/// Summarizes a day's workouts, keeping their order.
pub fn summarize(workouts: &[WorkoutView]) -> Vec<WorkoutSummary> {
    workouts.iter().map(WorkoutSummary::from).collect()
}
