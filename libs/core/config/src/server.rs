use crate::{ConfigError, FromEnv, env_or_default, env_parse};
use std::net::Ipv4Addr;

/// Bind address for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads HOST (default 0.0.0.0) and PORT (default 8080)
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("PORT", "8080")?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}
