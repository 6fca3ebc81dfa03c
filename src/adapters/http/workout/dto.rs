//! HTTP DTOs for workout, exercise and dashboard endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::DayQuery;
use crate::domain::workout::{
    ExerciseSummary, ExerciseView, SetView, WorkoutError, WorkoutSummary, WorkoutView,
};
use crate::ports::{ExerciseRecord, WorkoutRecord};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters selecting a calendar day.
///
/// Both values arrive as raw strings so malformed input gets the standard
/// JSON error body instead of the framework's plain-text rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayParams {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub utc_offset_minutes: Option<String>,
}

impl DayParams {
    /// The requested day, `None` when no date was given.
    pub fn to_query(&self) -> Result<Option<DayQuery>, WorkoutError> {
        let Some(date) = self.date.as_deref() else {
            return Ok(None);
        };
        let offset = match self.utc_offset_minutes.as_deref() {
            None => 0,
            Some(raw) => raw.trim().parse::<i32>().map_err(|_| {
                WorkoutError::invalid_input("utc_offset_minutes must be an integer")
            })?,
        };
        DayQuery::parse(date, offset).map(Some)
    }

    /// Like [`Self::to_query`] but the date is mandatory.
    pub fn require_query(&self) -> Result<DayQuery, WorkoutError> {
        self.to_query()?
            .ok_or_else(|| WorkoutError::invalid_input("date is required (YYYY-MM-DD)"))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One workout of the day view with its exercises and sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: i32,
    pub name: Option<String>,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub exercises: Vec<ExerciseResponse>,
}

impl From<WorkoutView> for WorkoutResponse {
    fn from(view: WorkoutView) -> Self {
        Self {
            id: view.id.value(),
            name: view.name,
            started_at: view.started_at.to_rfc3339(),
            completed_at: view.completed_at.map(|t| t.to_rfc3339()),
            exercises: view.exercises.into_iter().map(Into::into).collect(),
        }
    }
}

/// One exercise placement inside a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: i32,
    pub exercise_id: i32,
    pub name: String,
    pub order: i32,
    pub sets: Vec<SetResponse>,
}

impl From<ExerciseView> for ExerciseResponse {
    fn from(view: ExerciseView) -> Self {
        Self {
            id: view.workout_exercise_id.value(),
            exercise_id: view.exercise_id.value(),
            name: view.name,
            order: view.order,
            sets: view.sets.into_iter().map(Into::into).collect(),
        }
    }
}

/// One logged set; `weight` is a decimal string such as `"62.50"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetResponse {
    pub id: i32,
    pub set_number: i32,
    pub reps: Option<i32>,
    pub weight: Option<String>,
}

impl From<SetView> for SetResponse {
    fn from(view: SetView) -> Self {
        Self {
            id: view.id.value(),
            set_number: view.set_number,
            reps: view.reps,
            weight: view.weight.map(|w| w.to_string()),
        }
    }
}

/// Workout without children, used by the history list and single lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecordResponse {
    pub id: i32,
    pub name: Option<String>,
    pub started_at: String,
    pub completed_at: Option<String>,
}

impl From<WorkoutRecord> for WorkoutRecordResponse {
    fn from(record: WorkoutRecord) -> Self {
        Self {
            id: record.id.value(),
            name: record.name,
            started_at: record.started_at.to_rfc3339(),
            completed_at: record.completed_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummaryResponse {
    pub id: i32,
    pub name: String,
    pub started_at: String,
    pub exercises: Vec<ExerciseSummaryResponse>,
}

impl From<WorkoutSummary> for WorkoutSummaryResponse {
    fn from(summary: WorkoutSummary) -> Self {
        Self {
            id: summary.id.value(),
            name: summary.name,
            started_at: summary.started_at.to_rfc3339(),
            exercises: summary.exercises.into_iter().map(Into::into).collect(),
        }
    }
}

/// One line of a dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSummaryResponse {
    pub id: i32,
    pub name: String,
    pub set_count: usize,
    pub reps: i32,
}

impl From<ExerciseSummary> for ExerciseSummaryResponse {
    fn from(summary: ExerciseSummary) -> Self {
        Self {
            id: summary.id.value(),
            name: summary.name,
            set_count: summary.set_count,
            reps: summary.reps,
        }
    }
}

/// Exercise library entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecordResponse {
    pub id: i32,
    pub name: String,
}

impl From<ExerciseRecord> for ExerciseRecordResponse {
    fn from(record: ExerciseRecord) -> Self {
        Self {
            id: record.id.value(),
            name: record.name,
        }
    }
}
