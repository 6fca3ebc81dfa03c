//! HTTP adapter for the workout log read API.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DayParams, ExerciseRecordResponse, ExerciseResponse, ExerciseSummaryResponse, SetResponse,
    WorkoutRecordResponse, WorkoutResponse, WorkoutSummaryResponse,
};
pub use handlers::WorkoutHandlers;
pub use routes::workout_routes;
