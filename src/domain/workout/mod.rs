//! Workout domain: day boundaries, the nested workout read model and the
//! dashboard summary built from it.

mod day_range;
mod errors;
mod summary;
mod view;

pub use day_range::{
    parse_calendar_date, utc_offset_from_minutes, DayRange, MAX_UTC_OFFSET_MINUTES,
};
pub use errors::WorkoutError;
pub use summary::{
    summarize, ExerciseSummary, WorkoutSummary, DEFAULT_REPS, DEFAULT_WORKOUT_NAME,
};
pub use view::{sort_workouts, ExerciseView, SetView, WorkoutView};
