//! Workout Log - personal workout log read service
//!
//! Serves a user's workouts, exercises and sets by calendar day. Every read
//! is scoped to the identity verified by the auth middleware.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
