//! PostgreSQL implementation of WorkoutReader.
//!
//! Placement and set queries join back to `workouts` so rows are only
//! reachable through a workout owned by the requesting user.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, ExerciseId, SetId, Timestamp, UserId, WorkoutExerciseId, WorkoutId,
};
use crate::domain::workout::DayRange;
use crate::ports::{PlacementRecord, SetRecord, WorkoutReader, WorkoutRecord};

/// PostgreSQL implementation of WorkoutReader.
#[derive(Clone)]
pub struct PostgresWorkoutReader {
    pool: PgPool,
}

impl PostgresWorkoutReader {
    /// Creates a new PostgresWorkoutReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutReader for PostgresWorkoutReader {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WorkoutRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, started_at, completed_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY started_at ASC, id ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list workouts", e))?;

        rows.into_iter().map(row_to_workout).collect()
    }

    async fn list_started_within(
        &self,
        user_id: &UserId,
        range: &DayRange,
    ) -> Result<Vec<WorkoutRecord>, DomainError> {
        tracing::debug!(
            user_id = %user_id,
            start = %range.start().to_rfc3339(),
            end = %range.end().to_rfc3339(),
            "Querying workouts for day"
        );

        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, started_at, completed_at
            FROM workouts
            WHERE user_id = $1
              AND started_at >= $2
              AND started_at < $3
            ORDER BY started_at ASC, id ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(*range.start().as_datetime())
        .bind(*range.end().as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list workouts for day", e))?;

        rows.into_iter().map(row_to_workout).collect()
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: WorkoutId,
    ) -> Result<Option<WorkoutRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, started_at, completed_at
            FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.value())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch workout", e))?;

        row.map(row_to_workout).transpose()
    }

    async fn list_placements(
        &self,
        user_id: &UserId,
        workout_id: WorkoutId,
    ) -> Result<Vec<PlacementRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT we.id, we.workout_id, we.exercise_id, e.name AS exercise_name, we."order"
            FROM workout_exercises we
            JOIN workouts w ON w.id = we.workout_id
            JOIN exercises e ON e.id = we.exercise_id AND e.user_id = w.user_id
            WHERE we.workout_id = $1 AND w.user_id = $2
            ORDER BY we."order" ASC, we.id ASC
            "#,
        )
        .bind(workout_id.value())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list workout exercises", e))?;

        rows.into_iter().map(row_to_placement).collect()
    }

    async fn list_sets(
        &self,
        user_id: &UserId,
        workout_exercise_id: WorkoutExerciseId,
    ) -> Result<Vec<SetRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.workout_exercise_id, s.set_number, s.reps, s.weight
            FROM sets s
            JOIN workout_exercises we ON we.id = s.workout_exercise_id
            JOIN workouts w ON w.id = we.workout_id
            WHERE s.workout_exercise_id = $1 AND w.user_id = $2
            ORDER BY s.set_number ASC, s.id ASC
            "#,
        )
        .bind(workout_exercise_id.value())
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sets", e))?;

        rows.into_iter().map(row_to_set).collect()
    }
}

/// Reads one column, reporting the column name on failure.
pub(super) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

/// A stored owner id that fails validation is corrupt data, not bad input.
pub(super) fn stored_user_id(raw: String) -> Result<UserId, DomainError> {
    UserId::new(raw).map_err(|e| DomainError::database("Corrupt owner id in stored row", e))
}

fn row_to_workout(row: PgRow) -> Result<WorkoutRecord, DomainError> {
    let user_id: String = column(&row, "user_id")?;
    let started_at: DateTime<Utc> = column(&row, "started_at")?;
    let completed_at: Option<DateTime<Utc>> = column(&row, "completed_at")?;

    Ok(WorkoutRecord {
        id: WorkoutId::new(column(&row, "id")?),
        user_id: stored_user_id(user_id)?,
        name: column(&row, "name")?,
        started_at: Timestamp::from_datetime(started_at),
        completed_at: completed_at.map(Timestamp::from_datetime),
    })
}

fn row_to_placement(row: PgRow) -> Result<PlacementRecord, DomainError> {
    Ok(PlacementRecord {
        id: WorkoutExerciseId::new(column(&row, "id")?),
        workout_id: WorkoutId::new(column(&row, "workout_id")?),
        exercise_id: ExerciseId::new(column(&row, "exercise_id")?),
        exercise_name: column(&row, "exercise_name")?,
        order: column(&row, "order")?,
    })
}

fn row_to_set(row: PgRow) -> Result<SetRecord, DomainError> {
    let weight: Option<Decimal> = column(&row, "weight")?;

    Ok(SetRecord {
        id: SetId::new(column(&row, "id")?),
        workout_exercise_id: WorkoutExerciseId::new(column(&row, "workout_exercise_id")?),
        set_number: column(&row, "set_number")?,
        reps: column(&row, "reps")?,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workout::WorkoutError;

    #[test]
    fn stored_user_id_accepts_provider_ids() {
        assert_eq!(stored_user_id("alice".to_string()).unwrap().as_str(), "alice");
    }

    #[test]
    fn empty_stored_user_id_is_a_store_failure() {
        let err = stored_user_id(String::new()).unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(matches!(
            WorkoutError::from(err),
            WorkoutError::StoreUnavailable(_)
        ));
    }
}
