//! Exercise library query handlers.

mod get_exercise;
mod list_exercises;

pub use get_exercise::{GetExerciseHandler, GetExerciseQuery};
pub use list_exercises::ListExercisesHandler;
