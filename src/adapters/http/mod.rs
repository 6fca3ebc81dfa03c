//! HTTP adapters - REST API implementations.
//!
//! - `middleware` - Bearer token authentication and identity extractors
//! - `workout` - Workout, exercise and dashboard endpoints
//! - `router` - Assembled application router with shared layers

pub mod error;
pub mod middleware;
pub mod router;
pub mod workout;

pub use error::ErrorResponse;
pub use router::app_router;
pub use workout::{workout_routes, WorkoutHandlers};
