//! HTTP handlers for workout, exercise and dashboard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{workout_error_response, ErrorResponse};
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::application::handlers::{
    GetDaySummaryHandler, GetDayWorkoutsHandler, GetExerciseHandler, GetExerciseQuery,
    GetWorkoutHandler, GetWorkoutQuery, ListExercisesHandler, ListWorkoutsHandler,
};
use crate::domain::foundation::{ExerciseId, WorkoutId};
use crate::domain::workout::WorkoutSummary;
use crate::ports::{ExerciseReader, WorkoutReader};

use super::dto::{
    DayParams, ExerciseRecordResponse, WorkoutRecordResponse, WorkoutResponse,
    WorkoutSummaryResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WorkoutHandlers {
    day_handler: Arc<GetDayWorkoutsHandler>,
    summary_handler: Arc<GetDaySummaryHandler>,
    list_handler: Arc<ListWorkoutsHandler>,
    get_handler: Arc<GetWorkoutHandler>,
    list_exercises_handler: Arc<ListExercisesHandler>,
    get_exercise_handler: Arc<GetExerciseHandler>,
}

impl WorkoutHandlers {
    pub fn new(workouts: Arc<dyn WorkoutReader>, exercises: Arc<dyn ExerciseReader>) -> Self {
        Self {
            day_handler: Arc::new(GetDayWorkoutsHandler::new(workouts.clone())),
            summary_handler: Arc::new(GetDaySummaryHandler::new(workouts.clone())),
            list_handler: Arc::new(ListWorkoutsHandler::new(workouts.clone())),
            get_handler: Arc::new(GetWorkoutHandler::new(workouts)),
            list_exercises_handler: Arc::new(ListExercisesHandler::new(exercises.clone())),
            get_exercise_handler: Arc::new(GetExerciseHandler::new(exercises)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/workouts?date=YYYY-MM-DD&utc_offset_minutes=N
///
/// With a date: the day tree. Without: the flat workout history.
pub async fn list_workouts(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<DayParams>,
) -> Response {
    let day = match params.to_query() {
        Ok(day) => day,
        Err(e) => return workout_error_response(e),
    };

    match day {
        Some(query) => match handlers.day_handler.handle(Some(&user), query).await {
            Ok(workouts) => {
                let response: Vec<WorkoutResponse> =
                    workouts.into_iter().map(Into::into).collect();
                (StatusCode::OK, Json(response)).into_response()
            }
            Err(e) => workout_error_response(e),
        },
        None => match handlers.list_handler.handle(Some(&user)).await {
            Ok(workouts) => {
                let response: Vec<WorkoutRecordResponse> =
                    workouts.into_iter().map(Into::into).collect();
                (StatusCode::OK, Json(response)).into_response()
            }
            Err(e) => workout_error_response(e),
        },
    }
}

/// GET /api/workouts/summary?date=YYYY-MM-DD - Condensed day cards
pub async fn day_summary(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<DayParams>,
) -> Response {
    let query = match params.require_query() {
        Ok(query) => query,
        Err(e) => return workout_error_response(e),
    };

    match handlers.summary_handler.handle(Some(&user), query).await {
        Ok(summaries) => summaries_response(summaries),
        Err(e) => workout_error_response(e),
    }
}

/// GET /api/workouts/:id - Single workout
pub async fn get_workout(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    Path(workout_id): Path<String>,
) -> Response {
    let workout_id = match workout_id.parse::<WorkoutId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid workout ID")
                .with_status(StatusCode::BAD_REQUEST)
        }
    };

    match handlers
        .get_handler
        .handle(Some(&user), GetWorkoutQuery { workout_id })
        .await
    {
        Ok(Some(workout)) => {
            let response: WorkoutRecordResponse = workout.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => {
            ErrorResponse::not_found("Workout", workout_id).with_status(StatusCode::NOT_FOUND)
        }
        Err(e) => workout_error_response(e),
    }
}

/// GET /api/exercises - Exercise library
pub async fn list_exercises(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.list_exercises_handler.handle(Some(&user)).await {
        Ok(exercises) => {
            let response: Vec<ExerciseRecordResponse> =
                exercises.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => workout_error_response(e),
    }
}

/// GET /api/exercises/:id - Single exercise
pub async fn get_exercise(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    Path(exercise_id): Path<String>,
) -> Response {
    let exercise_id = match exercise_id.parse::<ExerciseId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid exercise ID")
                .with_status(StatusCode::BAD_REQUEST)
        }
    };

    match handlers
        .get_exercise_handler
        .handle(Some(&user), GetExerciseQuery { exercise_id })
        .await
    {
        Ok(Some(exercise)) => {
            let response: ExerciseRecordResponse = exercise.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => {
            ErrorResponse::not_found("Exercise", exercise_id).with_status(StatusCode::NOT_FOUND)
        }
        Err(e) => workout_error_response(e),
    }
}

/// GET /api/dashboard?date=YYYY-MM-DD - Day cards, empty for guests
pub async fn dashboard(
    State(handlers): State<WorkoutHandlers>,
    OptionalAuth(user): OptionalAuth,
    Query(params): Query<DayParams>,
) -> Response {
    let query = match params.require_query() {
        Ok(query) => query,
        Err(e) => return workout_error_response(e),
    };

    match handlers
        .summary_handler
        .handle_allowing_guest(user.as_ref(), query)
        .await
    {
        Ok(summaries) => summaries_response(summaries),
        Err(e) => workout_error_response(e),
    }
}

fn summaries_response(summaries: Vec<WorkoutSummary>) -> Response {
    let response: Vec<WorkoutSummaryResponse> = summaries.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(response)).into_response()
}
