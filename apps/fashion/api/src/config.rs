use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};
use domain_catalog::{CatalogSettings, EncoderConfig, QdrantConfig};

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub qdrant: QdrantConfig,
    pub encoder: EncoderConfig,
    pub catalog: CatalogSettings,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080
        let cors = CorsConfig::from_env()?;
        let qdrant = QdrantConfig::from_env()?;
        let encoder = EncoderConfig::from_env()?;
        let catalog = CatalogSettings::from_env_for(&qdrant)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            qdrant,
            encoder,
            catalog,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        temp_env::with_vars_unset(
            [
                "QDRANT_URL",
                "QDRANT_API_KEY",
                "QDRANT_COLLECTION",
                "CATALOG_GROUP_ORDER",
                "PORT",
                "APP_ENV",
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.qdrant.url, "http://localhost:6334");
                assert_eq!(config.qdrant.collection, "h&m-mini");
                assert_eq!(config.catalog.collection, "h&m-mini");
                assert_eq!(config.app.name, "fashion_api");
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_catalog_follows_collection_override() {
        temp_env::with_var("QDRANT_COLLECTION", Some("spring-drop"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.catalog.collection, "spring-drop");
        });
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
