//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, auth)
//! - `workout` - Day boundaries, the nested workout read model and summaries

pub mod foundation;
pub mod workout;
