use core_config::{ConfigError, FromEnv, env_or_default};

use crate::qdrant::QdrantConfig;

pub const DEFAULT_GROUP_ORDER: [&str; 5] =
    ["Menswear", "Ladieswear", "Divided", "Baby/Children", "Sport"];

/// Query Service settings
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub collection: String,
    /// Preferred facet order; unlisted groups follow alphabetically
    pub group_order: Vec<String>,
    pub groups_page_size: u32,
    /// Upper bound on pages read while collecting facets
    pub groups_max_pages: u32,
}

impl CatalogSettings {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            group_order: DEFAULT_GROUP_ORDER.iter().map(|g| g.to_string()).collect(),
            groups_page_size: 100,
            groups_max_pages: 1000,
        }
    }

    pub fn with_groups_paging(mut self, page_size: u32, max_pages: u32) -> Self {
        self.groups_page_size = page_size;
        self.groups_max_pages = max_pages;
        self
    }

    /// Settings sharing the collection of an existing Qdrant configuration
    pub fn from_env_for(qdrant: &QdrantConfig) -> Result<Self, ConfigError> {
        let mut settings = Self::from_env()?;
        settings.collection = qdrant.collection.clone();
        Ok(settings)
    }
}

fn parse_positive(key: &str, default: &str) -> Result<u32, ConfigError> {
    let value: u32 = env_or_default(key, default)
        .parse()
        .map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })?;

    if value == 0 {
        return Err(ConfigError::ParseError {
            key: key.to_string(),
            details: "must be greater than zero".to_string(),
        });
    }

    Ok(value)
}

impl FromEnv for CatalogSettings {
    /// Reads:
    /// - QDRANT_COLLECTION: defaults to "h&m-mini"
    /// - CATALOG_GROUP_ORDER: comma-separated preferred facet order
    /// - CATALOG_GROUPS_PAGE_SIZE: defaults to 100
    /// - CATALOG_GROUPS_MAX_PAGES: defaults to 1000
    fn from_env() -> Result<Self, ConfigError> {
        let collection = env_or_default("QDRANT_COLLECTION", crate::qdrant::DEFAULT_COLLECTION);

        let group_order = env_or_default("CATALOG_GROUP_ORDER", &DEFAULT_GROUP_ORDER.join(","))
            .split(',')
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .map(|g| g.to_string())
            .collect();

        Ok(Self {
            collection,
            group_order,
            groups_page_size: parse_positive("CATALOG_GROUPS_PAGE_SIZE", "100")?,
            groups_max_pages: parse_positive("CATALOG_GROUPS_MAX_PAGES", "1000")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        temp_env::with_vars(
            [
                ("QDRANT_COLLECTION", None::<&str>),
                ("CATALOG_GROUP_ORDER", None),
                ("CATALOG_GROUPS_PAGE_SIZE", None),
                ("CATALOG_GROUPS_MAX_PAGES", None),
            ],
            || {
                let settings = CatalogSettings::from_env().unwrap();
                assert_eq!(settings.collection, "h&m-mini");
                assert_eq!(
                    settings.group_order,
                    vec!["Menswear", "Ladieswear", "Divided", "Baby/Children", "Sport"]
                );
                assert_eq!(settings.groups_page_size, 100);
                assert_eq!(settings.groups_max_pages, 1000);
            },
        );
    }

    #[test]
    fn test_group_order_from_env_is_trimmed() {
        temp_env::with_var("CATALOG_GROUP_ORDER", Some(" Sport , Menswear ,,"), || {
            let settings = CatalogSettings::from_env().unwrap();
            assert_eq!(settings.group_order, vec!["Sport", "Menswear"]);
        });
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        temp_env::with_var("CATALOG_GROUPS_PAGE_SIZE", Some("0"), || {
            let err = CatalogSettings::from_env().unwrap_err();
            assert!(err.to_string().contains("CATALOG_GROUPS_PAGE_SIZE"));
        });
    }

    #[test]
    fn test_collection_follows_qdrant_config() {
        let qdrant = QdrantConfig::new("http://qdrant:6334".to_string(), "fashion".to_string());
        temp_env::with_var_unset("QDRANT_COLLECTION", || {
            let settings = CatalogSettings::from_env_for(&qdrant).unwrap();
            assert_eq!(settings.collection, "fashion");
        });
    }
}
