//! Errors raised while reading or checking the service configuration.

use thiserror::Error;

/// Startup configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment could not be read into the typed sections.
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The values were read but are unusable.
    #[error("configuration rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// A configuration value that parsed but cannot be served with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("server.port must not be 0")]
    ZeroPort,

    #[error("server.host {0:?} is not a bindable address")]
    BadBindAddress(String),

    #[error("server.request_timeout_secs must be within 1..={max}, got {actual}")]
    RequestTimeout { actual: u64, max: u64 },

    #[error("database.url must use the postgres:// or postgresql:// scheme")]
    NotPostgres,

    #[error("database.min_connections ({min}) exceeds database.max_connections ({max})")]
    PoolBounds { min: u32, max: u32 },

    #[error("database.max_connections ({max}) is above the limit of {limit}")]
    PoolTooLarge { max: u32, limit: u32 },

    #[error("auth.issuer_url must use https in production")]
    InsecureIssuer,
}
