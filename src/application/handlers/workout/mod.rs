//! Workout query handlers.

mod get_day_summary;
mod get_day_workouts;
mod get_workout;
mod list_workouts;

pub use get_day_summary::GetDaySummaryHandler;
pub use get_day_workouts::{DayQuery, GetDayWorkoutsHandler};
pub use get_workout::{GetWorkoutHandler, GetWorkoutQuery};
pub use list_workouts::ListWorkoutsHandler;
