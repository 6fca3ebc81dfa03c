//! Storage Adapters
//!
//! In-process implementations of the reader ports.
//!
//! - **InMemoryWorkoutStore** - Workout log held in memory (testing/development)

mod in_memory_workout_store;

pub use in_memory_workout_store::InMemoryWorkoutStore;
