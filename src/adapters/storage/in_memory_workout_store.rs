//! In-Memory Workout Store Adapter
//!
//! Holds the four workout-log tables in memory and answers the reader ports
//! with the same scoping and ordering rules as the PostgreSQL readers.
//! Useful for testing and development.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, ExerciseId, OwnedByUser, SetId, Timestamp, UserId, WorkoutExerciseId,
    WorkoutId,
};
use crate::domain::workout::DayRange;
use crate::ports::{
    ExerciseReader, ExerciseRecord, PlacementRecord, SetRecord, WorkoutReader, WorkoutRecord,
};

#[derive(Debug, Clone)]
struct PlacementRow {
    id: WorkoutExerciseId,
    workout_id: WorkoutId,
    exercise_id: ExerciseId,
    order: i32,
}

#[derive(Debug, Default)]
struct Tables {
    exercises: Vec<ExerciseRecord>,
    workouts: Vec<WorkoutRecord>,
    placements: Vec<PlacementRow>,
    sets: Vec<SetRecord>,
    failure: Option<String>,
}

impl Tables {
    fn check_available(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::new(ErrorCode::DatabaseError, message.clone())),
            None => Ok(()),
        }
    }

    fn owns_workout(&self, user_id: &UserId, workout_id: WorkoutId) -> bool {
        self.workouts
            .iter()
            .any(|w| w.id == workout_id && w.is_owner(user_id))
    }

    fn owns_placement(&self, user_id: &UserId, placement_id: WorkoutExerciseId) -> bool {
        self.placements
            .iter()
            .find(|p| p.id == placement_id)
            .is_some_and(|p| self.owns_workout(user_id, p.workout_id))
    }

    fn workouts_of(&self, user_id: &UserId) -> Vec<WorkoutRecord> {
        let mut workouts: Vec<WorkoutRecord> = self
            .workouts
            .iter()
            .filter(|w| w.is_owner(user_id))
            .cloned()
            .collect();
        workouts.sort_by_key(|w| (w.started_at, w.id));
        workouts
    }
}

/// In-memory workout log for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkoutStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryWorkoutStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exercise to the user's library.
    pub async fn add_exercise(&self, user_id: &UserId, name: &str) -> ExerciseId {
        let mut tables = self.tables.write().await;
        let id = ExerciseId::new(next_serial(tables.exercises.len()));
        tables.exercises.push(ExerciseRecord {
            id,
            user_id: user_id.clone(),
            name: name.to_string(),
        });
        id
    }

    /// Adds a workout owned by the user.
    pub async fn add_workout(
        &self,
        user_id: &UserId,
        name: Option<&str>,
        started_at: Timestamp,
    ) -> WorkoutId {
        let mut tables = self.tables.write().await;
        let id = WorkoutId::new(next_serial(tables.workouts.len()));
        tables.workouts.push(WorkoutRecord {
            id,
            user_id: user_id.clone(),
            name: name.map(String::from),
            started_at,
            completed_at: None,
        });
        id
    }

    /// Marks a workout as completed.
    pub async fn complete_workout(&self, id: WorkoutId, completed_at: Timestamp) {
        let mut tables = self.tables.write().await;
        if let Some(workout) = tables.workouts.iter_mut().find(|w| w.id == id) {
            workout.completed_at = Some(completed_at);
        }
    }

    /// Places an exercise into a workout at the given position.
    pub async fn add_placement(
        &self,
        workout_id: WorkoutId,
        exercise_id: ExerciseId,
        order: i32,
    ) -> WorkoutExerciseId {
        let mut tables = self.tables.write().await;
        let id = WorkoutExerciseId::new(next_serial(tables.placements.len()));
        tables.placements.push(PlacementRow {
            id,
            workout_id,
            exercise_id,
            order,
        });
        id
    }

    /// Logs a set against a placement.
    pub async fn add_set(
        &self,
        workout_exercise_id: WorkoutExerciseId,
        set_number: i32,
        reps: Option<i32>,
        weight: Option<Decimal>,
    ) -> SetId {
        let mut tables = self.tables.write().await;
        let id = SetId::new(next_serial(tables.sets.len()));
        tables.sets.push(SetRecord {
            id,
            workout_exercise_id,
            set_number,
            reps,
            weight,
        });
        id
    }

    /// Makes every subsequent read fail with a database error.
    pub async fn fail_reads(&self, message: &str) {
        self.tables.write().await.failure = Some(message.to_string());
    }
}

fn next_serial(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n.saturating_add(1))
}

#[async_trait]
impl WorkoutReader for InMemoryWorkoutStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WorkoutRecord>, DomainError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables.workouts_of(user_id))
    }

    async fn list_started_within(
        &self,
        user_id: &UserId,
        range: &DayRange,
    ) -> Result<Vec<WorkoutRecord>, DomainError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables
            .workouts_of(user_id)
            .into_iter()
            .filter(|w| range.contains(&w.started_at))
            .collect())
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: WorkoutId,
    ) -> Result<Option<WorkoutRecord>, DomainError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables
            .workouts
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .and_then(|w| w.visible_to(user_id)))
    }

    async fn list_placements(
        &self,
        user_id: &UserId,
        workout_id: WorkoutId,
    ) -> Result<Vec<PlacementRecord>, DomainError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        if !tables.owns_workout(user_id, workout_id) {
            return Ok(Vec::new());
        }

        let mut placements: Vec<PlacementRecord> = tables
            .placements
            .iter()
            .filter(|p| p.workout_id == workout_id)
            .filter_map(|p| {
                let exercise = tables
                    .exercises
                    .iter()
                    .find(|e| e.id == p.exercise_id && e.is_owner(user_id))?;
                Some(PlacementRecord {
                    id: p.id,
                    workout_id: p.workout_id,
                    exercise_id: p.exercise_id,
                    exercise_name: exercise.name.clone(),
                    order: p.order,
                })
            })
            .collect();
        placements.sort_by_key(|p| (p.order, p.id));
        Ok(placements)
    }

    async fn list_sets(
        &self,
        user_id: &UserId,
        workout_exercise_id: WorkoutExerciseId,
    ) -> Result<Vec<SetRecord>, DomainError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        if !tables.owns_placement(user_id, workout_exercise_id) {
            return Ok(Vec::new());
        }

        let mut sets: Vec<SetRecord> = tables
            .sets
            .iter()
            .filter(|s| s.workout_exercise_id == workout_exercise_id)
            .cloned()
            .collect();
        sets.sort_by_key(|s| (s.set_number, s.id));
        Ok(sets)
    }
}

#[async_trait]
impl ExerciseReader for InMemoryWorkoutStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ExerciseRecord>, DomainError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        let mut exercises: Vec<ExerciseRecord> = tables
            .exercises
            .iter()
            .filter(|e| e.is_owner(user_id))
            .cloned()
            .collect();
        exercises.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(exercises)
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: ExerciseId,
    ) -> Result<Option<ExerciseRecord>, DomainError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables
            .exercises
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .and_then(|e| e.visible_to(user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    fn bob() -> UserId {
        UserId::new("bob").unwrap()
    }

    fn at(hour: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn placements_come_back_in_order_with_exercise_names() {
        let store = InMemoryWorkoutStore::new();
        let squat = store.add_exercise(&alice(), "Squat").await;
        let bench = store.add_exercise(&alice(), "Bench").await;
        let workout = store.add_workout(&alice(), None, at(9)).await;
        store.add_placement(workout, squat, 2).await;
        store.add_placement(workout, bench, 1).await;

        let placements = store.list_placements(&alice(), workout).await.unwrap();

        let names: Vec<&str> = placements.iter().map(|p| p.exercise_name.as_str()).collect();
        assert_eq!(names, vec!["Bench", "Squat"]);
    }

    #[tokio::test]
    async fn children_of_foreign_workouts_are_not_returned() {
        let store = InMemoryWorkoutStore::new();
        let squat = store.add_exercise(&alice(), "Squat").await;
        let workout = store.add_workout(&alice(), None, at(9)).await;
        let placement = store.add_placement(workout, squat, 1).await;
        store.add_set(placement, 1, Some(5), None).await;

        assert!(store.list_placements(&bob(), workout).await.unwrap().is_empty());
        assert!(store.list_sets(&bob(), placement).await.unwrap().is_empty());
        assert_eq!(store.list_sets(&alice(), placement).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn placements_pointing_at_foreign_exercises_are_dropped() {
        let store = InMemoryWorkoutStore::new();
        let secret = store.add_exercise(&bob(), "Bob Secret Lift").await;
        let squat = store.add_exercise(&alice(), "Squat").await;
        let workout = store.add_workout(&alice(), None, at(9)).await;
        store.add_placement(workout, secret, 1).await;
        store.add_placement(workout, squat, 2).await;

        let placements = store.list_placements(&alice(), workout).await.unwrap();

        let names: Vec<&str> = placements.iter().map(|p| p.exercise_name.as_str()).collect();
        assert_eq!(names, vec!["Squat"]);
    }

    #[tokio::test]
    async fn find_for_user_hides_foreign_workouts() {
        let store = InMemoryWorkoutStore::new();
        let workout = store.add_workout(&alice(), Some("Legs"), at(9)).await;

        assert!(WorkoutReader::find_for_user(&store, &alice(), workout)
            .await
            .unwrap()
            .is_some());
        assert!(WorkoutReader::find_for_user(&store, &bob(), workout)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn exercises_are_listed_by_name() {
        let store = InMemoryWorkoutStore::new();
        store.add_exercise(&alice(), "Squat").await;
        store.add_exercise(&alice(), "Deadlift").await;
        store.add_exercise(&bob(), "Curl").await;

        let exercises = ExerciseReader::list_by_user(&store, &alice()).await.unwrap();

        let names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Deadlift", "Squat"]);
    }

    #[tokio::test]
    async fn failed_store_reports_database_error() {
        let store = InMemoryWorkoutStore::new();
        store.fail_reads("connection reset").await;

        let err = WorkoutReader::list_by_user(&store, &alice()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
