//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresWorkoutReader` - Workouts, placements and sets
//! - `PostgresExerciseReader` - Exercise library

mod exercise_reader;
mod workout_reader;

pub use exercise_reader::PostgresExerciseReader;
pub use workout_reader::PostgresWorkoutReader;
