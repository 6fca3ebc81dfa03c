//! HTTP routes for workout, exercise and dashboard endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    dashboard, day_summary, get_exercise, get_workout, list_exercises, list_workouts,
    WorkoutHandlers,
};

/// Creates the workout-log API router, relative to `/api`.
pub fn workout_routes(handlers: WorkoutHandlers) -> Router {
    Router::new()
        .route("/workouts", get(list_workouts))
        .route("/workouts/summary", get(day_summary))
        .route("/workouts/:id", get(get_workout))
        .route("/exercises", get(list_exercises))
        .route("/exercises/:id", get(get_exercise))
        .route("/dashboard", get(dashboard))
        .with_state(handlers)
}
