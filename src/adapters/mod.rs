//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (JWKS, mock)
//! - `http` - axum REST API
//! - `postgres` - PostgreSQL readers
//! - `storage` - In-memory readers for tests and development

pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;

pub use auth::{JwksSessionValidator, MockSessionValidator};
pub use postgres::{PostgresExerciseReader, PostgresWorkoutReader};
pub use storage::InMemoryWorkoutStore;
