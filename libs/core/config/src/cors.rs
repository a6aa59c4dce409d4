use crate::{ConfigError, FromEnv, env_or_default};

/// Origins allowed to make cross-origin requests.
///
/// Built from two variables: `FRONTEND_URL` (the web client) and `DOCS_URL`
/// (the host serving the interactive API documentation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allowed_origins: Vec<String> = Vec::new();
        for origin in origins {
            let origin = normalize_origin(&origin.into());
            if !origin.is_empty() && !allowed_origins.contains(&origin) {
                allowed_origins.push(origin);
            }
        }
        Self { allowed_origins }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        let origin = normalize_origin(origin);
        self.allowed_origins.iter().any(|allowed| *allowed == origin)
    }
}

// Browsers send origins without a trailing slash
fn normalize_origin(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let frontend = env_or_default("FRONTEND_URL", "http://localhost:5173");
        let docs = env_or_default("DOCS_URL", "http://localhost:8080");

        let config = Self::new([frontend, docs]);
        if config.allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "FRONTEND_URL".to_string(),
                details: "at least one CORS origin must be configured".to_string(),
            });
        }

        Ok(config)
    }
}
