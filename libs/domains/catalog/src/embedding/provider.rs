use async_trait::async_trait;

use crate::error::CatalogResult;

/// Trait for text embedding providers
///
/// The vectors produced must live in the same space as the vectors stored in
/// the collection (e.g. the text half of a CLIP model for image embeddings).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Model identifier, as reported by diagnostics
    fn model_name(&self) -> &str;

    /// Length of the vectors produced by this provider
    fn dimension(&self) -> usize;

    /// Generate the embedding for a single text
    async fn embed(&self, text: &str) -> CatalogResult<Vec<f32>>;
}
