//! PostgreSQL implementation of ExerciseReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::workout_reader::{column, stored_user_id};
use crate::domain::foundation::{DomainError, ExerciseId, UserId};
use crate::ports::{ExerciseReader, ExerciseRecord};

/// PostgreSQL implementation of ExerciseReader.
#[derive(Clone)]
pub struct PostgresExerciseReader {
    pool: PgPool,
}

impl PostgresExerciseReader {
    /// Creates a new PostgresExerciseReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseReader for PostgresExerciseReader {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ExerciseRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name
            FROM exercises
            WHERE user_id = $1
            ORDER BY name ASC, id ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list exercises", e))?;

        rows.into_iter().map(row_to_exercise).collect()
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: ExerciseId,
    ) -> Result<Option<ExerciseRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name
            FROM exercises
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.value())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch exercise", e))?;

        row.map(row_to_exercise).transpose()
    }
}

fn row_to_exercise(row: PgRow) -> Result<ExerciseRecord, DomainError> {
    let user_id: String = column(&row, "user_id")?;

    Ok(ExerciseRecord {
        id: ExerciseId::new(column(&row, "id")?),
        user_id: stored_user_id(user_id)?,
        name: column(&row, "name")?,
    })
}
