use core_config::{ConfigError, FromEnv, env_or_default};

/// Qdrant connection configuration
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub collection: String,
    pub timeout_secs: u64,
}

pub const DEFAULT_URL: &str = "http://localhost:6334";
pub const DEFAULT_COLLECTION: &str = "h&m-mini";

impl QdrantConfig {
    pub fn new(url: String, collection: String) -> Self {
        Self {
            url,
            api_key: None,
            collection,
            timeout_secs: 30,
        }
    }
}

impl FromEnv for QdrantConfig {
    /// Reads:
    /// - QDRANT_URL: defaults to the local gRPC endpoint
    /// - QDRANT_API_KEY: optional, an empty value counts as unset
    /// - QDRANT_COLLECTION: defaults to "h&m-mini"
    /// - QDRANT_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_or_default("QDRANT_URL", DEFAULT_URL);

        let api_key = std::env::var("QDRANT_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let collection = env_or_default("QDRANT_COLLECTION", DEFAULT_COLLECTION);

        let timeout_secs = env_or_default("QDRANT_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "QDRANT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            url,
            api_key,
            collection,
            timeout_secs,
        })
    }
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL.to_string(), DEFAULT_COLLECTION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qdrant_config_defaults() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", None::<&str>),
                ("QDRANT_API_KEY", None),
                ("QDRANT_COLLECTION", None),
                ("QDRANT_TIMEOUT_SECS", None),
            ],
            || {
                let config = QdrantConfig::from_env().unwrap();
                assert_eq!(config.url, DEFAULT_URL);
                assert_eq!(config.api_key, None);
                assert_eq!(config.collection, "h&m-mini");
                assert_eq!(config.timeout_secs, 30);
            },
        );
    }

    #[test]
    fn test_empty_api_key_is_treated_as_unset() {
        temp_env::with_var("QDRANT_API_KEY", Some(""), || {
            let config = QdrantConfig::from_env().unwrap();
            assert_eq!(config.api_key, None);
        });
    }

    #[test]
    fn test_custom_values() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", Some("https://cluster.cloud.qdrant.io:6334")),
                ("QDRANT_API_KEY", Some("secret")),
                ("QDRANT_COLLECTION", Some("fashion")),
                ("QDRANT_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = QdrantConfig::from_env().unwrap();
                assert_eq!(config.url, "https://cluster.cloud.qdrant.io:6334");
                assert_eq!(config.api_key.as_deref(), Some("secret"));
                assert_eq!(config.collection, "fashion");
                assert_eq!(config.timeout_secs, 5);
            },
        );
    }

    #[test]
    fn test_invalid_timeout() {
        temp_env::with_var("QDRANT_TIMEOUT_SECS", Some("soon"), || {
            let err = QdrantConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("QDRANT_TIMEOUT_SECS"));
        });
    }
}
