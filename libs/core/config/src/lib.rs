//! Environment-driven configuration shared by the catalog services.
//!
//! Every config struct implements [`FromEnv`] and is assembled by the binary
//! at startup. Missing required variables and unparsable values surface as
//! [`ConfigError`] so the process can refuse to start with a clear message.

pub mod cors;
pub mod server;
pub mod tracing;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment (controls log format)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load an environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load an environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Load an environment variable (or its default) and parse it into `T`.
///
/// Parse failures name the offending key, e.g. `PORT` or `DB_MAX_CONNECTIONS`.
pub fn env_parse<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}
