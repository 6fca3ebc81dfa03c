//! Nested read model: workout → exercises → sets.
//!
//! Ordering is reconstituted from each entity's own key while the tree is
//! built, so the order in which sibling fetches completed never shows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExerciseId, SetId, Timestamp, WorkoutExerciseId, WorkoutId};
use crate::ports::{PlacementRecord, SetRecord, WorkoutRecord};

/// One workout with its exercises in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutView {
    pub id: WorkoutId,
    pub name: Option<String>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub exercises: Vec<ExerciseView>,
}

/// One exercise placement with its sets in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseView {
    pub workout_exercise_id: WorkoutExerciseId,
    pub exercise_id: ExerciseId,
    pub name: String,
    pub order: i32,
    pub sets: Vec<SetView>,
}

/// One logged set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetView {
    pub id: SetId,
    pub set_number: i32,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
}

impl WorkoutView {
    /// Builds a workout view; exercises are sorted by `order`, ties broken by
    /// placement id.
    pub fn assemble(workout: WorkoutRecord, mut exercises: Vec<ExerciseView>) -> Self {
        exercises.sort_by_key(|e| (e.order, e.workout_exercise_id));
        Self {
            id: workout.id,
            name: workout.name,
            started_at: workout.started_at,
            completed_at: workout.completed_at,
            exercises,
        }
    }

    /// Number of sets across all exercises.
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

impl ExerciseView {
    /// Builds an exercise view; sets are sorted by `set_number`, ties broken
    /// by set id.
    pub fn assemble(placement: PlacementRecord, sets: Vec<SetRecord>) -> Self {
        let mut sets: Vec<SetView> = sets.into_iter().map(SetView::from).collect();
        sets.sort_by_key(|s| (s.set_number, s.id));
        Self {
            workout_exercise_id: placement.id,
            exercise_id: placement.exercise_id,
            name: placement.exercise_name,
            order: placement.order,
            sets,
        }
    }
}

impl From<SetRecord> for SetView {
    fn from(record: SetRecord) -> Self {
        Self {
            id: record.id,
            set_number: record.set_number,
            reps: record.reps,
            weight: record.weight,
        }
    }
}

/// Orders workouts for display: `started_at` ascending, then id.
pub fn sort_workouts(workouts: &mut [WorkoutView]) {
    workouts.sort_by_key(|w| (w.started_at, w.id));
}
