//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionValidator` - Identity provider boundary (bearer token → user)
//! - `WorkoutReader` - Read-only access to workouts, placements and sets
//! - `ExerciseReader` - Read-only access to the exercise library

mod exercise_reader;
mod session_validator;
mod workout_reader;

pub use exercise_reader::{ExerciseReader, ExerciseRecord};
pub use session_validator::SessionValidator;
pub use workout_reader::{PlacementRecord, SetRecord, WorkoutReader, WorkoutRecord};
