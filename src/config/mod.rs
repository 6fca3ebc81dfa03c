//! Service configuration, read from the environment at startup.
//!
//! Variables carry the `WORKOUT_LOG` prefix and use `__` between section and
//! key, so `WORKOUT_LOG__DATABASE__URL` fills `database.url`. A `.env` file in
//! the working directory is read first when present.
//!
//! ```no_run
//! use workout_log::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "WORKOUT_LOG";

/// All configuration sections. `server` may be omitted entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the prefixed environment into typed sections.
    ///
    /// Only shape errors surface here; call [`AppConfig::validate`] for the
    /// semantic checks.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__");
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
