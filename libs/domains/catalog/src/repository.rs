use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{CollectionInfo, Payload, ScrollPage, ScrollQuery, SearchQuery};

/// Repository trait for the catalog's vector store
///
/// This trait abstracts the underlying vector database (Qdrant). Only the
/// read paths the catalog needs are exposed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Plain paginated listing, no similarity ranking
    async fn scroll(&self, collection_name: &str, query: ScrollQuery)
    -> CatalogResult<ScrollPage>;

    /// Similarity search; hits come back ordered by decreasing score
    async fn search(&self, collection_name: &str, query: SearchQuery)
    -> CatalogResult<Vec<Payload>>;

    /// Collection metadata, `None` when the collection does not exist
    async fn get_collection(&self, collection_name: &str)
    -> CatalogResult<Option<CollectionInfo>>;
}
