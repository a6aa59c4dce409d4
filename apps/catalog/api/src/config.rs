use core_config::{FromEnv, cors::CorsConfig, server::ServerConfig};

// Import database config from the database library
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if DATABASE_URL is not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let cors = CorsConfig::from_env()?; // FRONTEND_URL and DOCS_URL

        Ok(Self {
            database,
            server,
            cors,
            environment,
        })
    }
}
