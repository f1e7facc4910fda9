use crate::{env_or_default, ConfigError, FromEnv};

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// Allowed browser origins
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// `*` anywhere in the list allows every origin
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl FromEnv for CorsConfig {
    /// Reads CORS_ORIGINS, a comma-separated list (default: http://localhost:3000)
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = env_or_default("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ORIGINS".to_string(),
                details: "no origins listed".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(vec![DEFAULT_CORS_ORIGINS.to_string()])
    }
}
