//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwks` - Production validator for JWKS-publishing OIDC providers
//! - `mock` - Test implementation that doesn't require external services

mod jwks;
mod mock;

pub use jwks::JwksSessionValidator;
pub use mock::MockSessionValidator;
