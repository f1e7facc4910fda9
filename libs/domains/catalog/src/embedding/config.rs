use core_config::{ConfigError, FromEnv, env_or_default};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Local text encoders supported by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum TextModel {
    /// Text tower of CLIP ViT-B/32 (512 dimensions), matches image embeddings
    #[default]
    ClipVitB32Text,
    /// sentence-transformers/all-MiniLM-L6-v2 (384 dimensions)
    AllMiniLmL6V2,
    /// BAAI/bge-small-en-v1.5 (384 dimensions)
    BgeSmallEnV15,
    /// BAAI/bge-base-en-v1.5 (768 dimensions)
    BgeBaseEnV15,
}

impl TextModel {
    pub fn model_name(&self) -> &'static str {
        match self {
            TextModel::ClipVitB32Text => "Qdrant/clip-ViT-B-32-text",
            TextModel::AllMiniLmL6V2 => "sentence-transformers/all-MiniLM-L6-v2",
            TextModel::BgeSmallEnV15 => "BAAI/bge-small-en-v1.5",
            TextModel::BgeBaseEnV15 => "BAAI/bge-base-en-v1.5",
        }
    }

    /// Resolve a model identifier, case-insensitively, with short aliases
    pub fn from_model_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "qdrant/clip-vit-b-32-text" | "clip-vit-b-32" | "clip" => {
                Some(TextModel::ClipVitB32Text)
            }
            "sentence-transformers/all-minilm-l6-v2" | "all-minilm-l6-v2" | "minilm" => {
                Some(TextModel::AllMiniLmL6V2)
            }
            "baai/bge-small-en-v1.5" | "bge-small-en" | "bge-small" => {
                Some(TextModel::BgeSmallEnV15)
            }
            "baai/bge-base-en-v1.5" | "bge-base-en" | "bge-base" => Some(TextModel::BgeBaseEnV15),
            _ => None,
        }
    }
}

/// Embedding encoder configuration
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    pub model: TextModel,
    pub cache_dir: Option<String>,
    pub show_download_progress: bool,
}

impl FromEnv for EncoderConfig {
    /// Reads:
    /// - TEXT_EMBEDDING_MODEL: defaults to "Qdrant/clip-ViT-B-32-text"
    /// - EMBEDDING_CACHE_DIR: optional model cache directory
    fn from_env() -> Result<Self, ConfigError> {
        let model_id = env_or_default("TEXT_EMBEDDING_MODEL", TextModel::default().model_name());
        let model = TextModel::from_model_id(&model_id).ok_or_else(|| ConfigError::ParseError {
            key: "TEXT_EMBEDDING_MODEL".to_string(),
            details: format!("unsupported model '{}'", model_id),
        })?;

        let cache_dir = std::env::var("EMBEDDING_CACHE_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty());

        Ok(Self {
            model,
            cache_dir,
            show_download_progress: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_clip_text() {
        temp_env::with_vars(
            [
                ("TEXT_EMBEDDING_MODEL", None::<&str>),
                ("EMBEDDING_CACHE_DIR", None),
            ],
            || {
                let config = EncoderConfig::from_env().unwrap();
                assert_eq!(config.model, TextModel::ClipVitB32Text);
                assert_eq!(config.model.model_name(), "Qdrant/clip-ViT-B-32-text");
                assert_eq!(config.cache_dir, None);
            },
        );
    }

    #[test]
    fn test_model_id_is_case_insensitive() {
        assert_eq!(
            TextModel::from_model_id("QDRANT/CLIP-VIT-B-32-TEXT"),
            Some(TextModel::ClipVitB32Text)
        );
        assert_eq!(
            TextModel::from_model_id("bge-small"),
            Some(TextModel::BgeSmallEnV15)
        );
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        temp_env::with_var("TEXT_EMBEDDING_MODEL", Some("word2vec"), || {
            let err = EncoderConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("TEXT_EMBEDDING_MODEL"));
        });
    }

    #[test]
    fn test_cache_dir_from_env() {
        temp_env::with_var("EMBEDDING_CACHE_DIR", Some("/var/cache/models"), || {
            let config = EncoderConfig::from_env().unwrap();
            assert_eq!(config.cache_dir.as_deref(), Some("/var/cache/models"));
        });
    }
}
