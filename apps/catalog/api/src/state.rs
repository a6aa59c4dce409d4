//! Application state management.
//!
//! The state is built once at startup and handed to the route builders.

use database::postgres::{DatabaseConnection, PostgresConfig, connect_and_migrate};
use migration::Migrator;
use tracing::{error, info};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool, `None` when the database was unreachable at startup
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    /// Connects to PostgreSQL and applies migrations.
    ///
    /// A failed connection is logged and the service keeps running without a
    /// database; product endpoints then answer 500 `DATABASE_UNAVAILABLE`.
    pub async fn connect(config: crate::config::Config) -> Self {
        let db = connect_database(config.database.clone()).await;
        Self { config, db }
    }
}

pub async fn connect_database(config: PostgresConfig) -> Option<DatabaseConnection> {
    let target = config.redacted_url();
    info!(database = %target, "Connecting to PostgreSQL");

    match connect_and_migrate::<Migrator>(config, "catalog_api").await {
        Ok(db) => {
            info!("PostgreSQL connected successfully");
            Some(db)
        }
        Err(e) => {
            error!(database = %target, error = %e, "PostgreSQL unavailable, serving without a database");
            None
        }
    }
}
