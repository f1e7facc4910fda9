//! Local ONNX text encoder backed by the `fastembed` crate.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use super::{EmbeddingProvider, EncoderConfig, TextModel};
use crate::error::{CatalogError, CatalogResult};

/// Text used to warm the model and measure its output dimension
const PROBE_TEXT: &str = "warmup";

pub struct FastEmbedProvider {
    model: Arc<TextEmbedding>,
    text_model: TextModel,
    dimension: usize,
}

impl FastEmbedProvider {
    /// Load the model (downloading it on first use) and run one probe embedding.
    ///
    /// Blocking; call from `spawn_blocking` or before the runtime serves traffic.
    pub fn new(config: &EncoderConfig) -> CatalogResult<Self> {
        let mut options = InitOptions::new(Self::resolve_model(config.model))
            .with_show_download_progress(config.show_download_progress);

        if let Some(cache_dir) = &config.cache_dir {
            options = options.with_cache_dir(PathBuf::from(cache_dir));
        }

        let model = TextEmbedding::try_new(options).map_err(|e| {
            CatalogError::Embedding(format!(
                "Failed to initialize embedding model {}: {}",
                config.model.model_name(),
                e
            ))
        })?;

        let dimension = embed_one(&model, PROBE_TEXT)?.len();
        info!(
            "Initialized TextEmbedding with model {} ({} dimensions)",
            config.model.model_name(),
            dimension
        );

        Ok(Self {
            model: Arc::new(model),
            text_model: config.model,
            dimension,
        })
    }

    fn resolve_model(model: TextModel) -> EmbeddingModel {
        match model {
            TextModel::ClipVitB32Text => EmbeddingModel::ClipVitB32,
            TextModel::AllMiniLmL6V2 => EmbeddingModel::AllMiniLML6V2,
            TextModel::BgeSmallEnV15 => EmbeddingModel::BGESmallENV15,
            TextModel::BgeBaseEnV15 => EmbeddingModel::BGEBaseENV15,
        }
    }
}

fn embed_one(model: &TextEmbedding, text: &str) -> CatalogResult<Vec<f32>> {
    model
        .embed(vec![text], None)
        .map_err(|e| CatalogError::Embedding(format!("Embedding failed: {}", e)))?
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::Embedding("Empty embedding result".to_string()))
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    fn model_name(&self) -> &str {
        self.text_model.model_name()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> CatalogResult<Vec<f32>> {
        let model = Arc::clone(&self.model);
        let text = text.to_string();

        // ONNX inference is CPU-bound
        tokio::task::spawn_blocking(move || embed_one(&model, &text))
            .await
            .map_err(|e| CatalogError::Embedding(format!("Embedding task failed: {}", e)))?
    }
}
