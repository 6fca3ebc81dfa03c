//! Record store connection settings.

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use super::error::ValidationError;

const MAX_POOL_SIZE: u32 = 100;

/// `database` section. Only `url` has no usable default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `postgres://` connection string.
    pub url: String,

    pub min_connections: u32,

    /// Also caps how many fan-out reads of one day query run at once.
    pub max_connections: u32,

    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,

    /// Apply `migrations/` before serving.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 2,
            max_connections: 10,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            run_migrations: false,
        }
    }
}

impl DatabaseConfig {
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::Missing("database.url"));
        }
        let scheme = self.url.split_once("://").map(|(scheme, _)| scheme);
        if !matches!(scheme, Some("postgres" | "postgresql")) {
            return Err(ValidationError::NotPostgres);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::PoolBounds {
                min: self.min_connections,
                max: self.max_connections,
            });
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolTooLarge {
                max: self.max_connections,
                limit: MAX_POOL_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn both_postgres_schemes_are_accepted() {
        assert!(with_url("postgres://lifter@localhost/workouts").validate().is_ok());
        assert!(with_url("postgresql://lifter@localhost:5432/workouts").validate().is_ok());
    }

    #[test]
    fn url_is_mandatory() {
        assert_eq!(
            with_url("  ").validate(),
            Err(ValidationError::Missing("database.url"))
        );
    }

    #[test]
    fn other_databases_are_rejected() {
        assert_eq!(
            with_url("mysql://localhost/workouts").validate(),
            Err(ValidationError::NotPostgres)
        );
        assert_eq!(
            with_url("localhost/workouts").validate(),
            Err(ValidationError::NotPostgres)
        );
    }

    #[test]
    fn pool_bounds_must_be_ordered_and_capped() {
        let inverted = DatabaseConfig {
            min_connections: 12,
            max_connections: 4,
            ..with_url("postgres://localhost/workouts")
        };
        assert_eq!(
            inverted.validate(),
            Err(ValidationError::PoolBounds { min: 12, max: 4 })
        );

        let oversized = DatabaseConfig {
            max_connections: 150,
            ..with_url("postgres://localhost/workouts")
        };
        assert_eq!(
            oversized.validate(),
            Err(ValidationError::PoolTooLarge {
                max: 150,
                limit: MAX_POOL_SIZE
            })
        );
    }

    #[test]
    fn migrations_are_opt_in() {
        assert!(!DatabaseConfig::default().run_migrations);
    }
}
