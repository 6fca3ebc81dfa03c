//! `workout-log` server entry-point.
//!
//! Loads configuration from the environment, connects to PostgreSQL,
//! optionally applies migrations and serves the HTTP API until Ctrl-C.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use workout_log::adapters::auth::JwksSessionValidator;
use workout_log::adapters::http::{app_router, WorkoutHandlers};
use workout_log::adapters::postgres::{PostgresExerciseReader, PostgresWorkoutReader};
use workout_log::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    info!(
        environment = ?config.server.environment,
        max_connections = config.database.max_connections,
        "Connecting to database"
    );
    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let handlers = WorkoutHandlers::new(
        Arc::new(PostgresWorkoutReader::new(pool.clone())),
        Arc::new(PostgresExerciseReader::new(pool)),
    );
    let validator = Arc::new(JwksSessionValidator::from_config(&config.auth)?);
    let app = app_router(handlers, validator, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`; production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
