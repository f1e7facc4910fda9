use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::embedding::EmbeddingProvider;
use crate::error::{CatalogError, CatalogResult};
use crate::filter::{CatalogFilter, GROUP_FIELD};
use crate::mapper::map_payloads;
use crate::models::{
    CatalogQuery, CollectionInfo, FeaturedProducts, PointCursor, ScrollQuery, SearchQuery,
    SearchResult,
};
use crate::repository::CatalogRepository;
use crate::settings::CatalogSettings;

/// Catalog query service
///
/// Owns one store handle and one loaded encoder for the lifetime of the
/// process. Neither is mutated after construction.
pub struct CatalogService<R: CatalogRepository> {
    repository: R,
    encoder: Arc<dyn EmbeddingProvider>,
    settings: CatalogSettings,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(
        repository: R,
        encoder: Arc<dyn EmbeddingProvider>,
        settings: CatalogSettings,
    ) -> Self {
        Self {
            repository,
            encoder,
            settings,
        }
    }

    /// Build the service after checking that the collection exists and that
    /// the encoder produces vectors of the collection's dimension.
    pub async fn connect(
        repository: R,
        encoder: Arc<dyn EmbeddingProvider>,
        settings: CatalogSettings,
    ) -> CatalogResult<Self> {
        let info = repository
            .get_collection(&settings.collection)
            .await?
            .ok_or_else(|| CatalogError::CollectionNotFound(settings.collection.clone()))?;

        let dimension = encoder.dimension() as u64;
        if info.vector_size != 0 && info.vector_size != dimension {
            return Err(CatalogError::Config(format!(
                "encoder '{}' produces {} dimensions but collection '{}' stores {}",
                encoder.model_name(),
                dimension,
                info.name,
                info.vector_size
            )));
        }

        info!(
            collection = %info.name,
            points = info.points_count,
            model = encoder.model_name(),
            "Catalog service ready"
        );

        Ok(Self::new(repository, encoder, settings))
    }

    pub fn collection_name(&self) -> &str {
        &self.settings.collection
    }

    pub fn model_name(&self) -> &str {
        self.encoder.model_name()
    }

    /// Current collection metadata, `None` when the collection is gone
    pub async fn collection_info(&self) -> CatalogResult<Option<CollectionInfo>> {
        self.repository.get_collection(&self.settings.collection).await
    }

    /// Search the catalog.
    ///
    /// An empty query (after trimming) lists the filtered catalog without
    /// touching the encoder; otherwise the trimmed text is embedded once and
    /// a similarity search is run. Store ordering is kept as-is.
    pub async fn search(&self, query: &CatalogQuery) -> CatalogResult<Vec<SearchResult>> {
        self.run_search(query)
            .await
            .map_err(|e| CatalogError::SearchFailed(e.to_string()))
    }

    async fn run_search(&self, query: &CatalogQuery) -> CatalogResult<Vec<SearchResult>> {
        let filter = CatalogFilter::from_facets(&query.groups, &query.items);
        let text = query.query.trim();
        let filter_desc = filter
            .as_ref()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "none".to_string());

        let payloads = if text.is_empty() {
            info!(
                filter = %filter_desc,
                limit = query.limit,
                offset = query.offset,
                "Listing catalog without query text"
            );

            let offset = (query.offset > 0).then_some(PointCursor::Num(query.offset));
            let scroll = ScrollQuery::new(query.limit)
                .with_filter(filter)
                .with_offset(offset);

            self.repository
                .scroll(&self.settings.collection, scroll)
                .await?
                .records
        } else {
            info!(
                query = text,
                filter = %filter_desc,
                limit = query.limit,
                offset = query.offset,
                "Running vector search"
            );

            let vector = self.encoder.embed(text).await?;
            let search = SearchQuery {
                offset: query.offset,
                filter,
                ..SearchQuery::new(vector, u64::from(query.limit))
            };

            self.repository
                .search(&self.settings.collection, search)
                .await?
        };

        let results = map_payloads(&payloads)?;
        info!(count = results.len(), "Search returned results");
        Ok(results)
    }

    /// Distinct category groups, preferred ones first, the rest alphabetical
    pub async fn get_groups(&self) -> CatalogResult<Vec<String>> {
        self.collect_groups()
            .await
            .map_err(|e| CatalogError::FetchGroupsFailed(e.to_string()))
    }

    async fn collect_groups(&self) -> CatalogResult<Vec<String>> {
        let mut seen = HashSet::new();
        let mut cursor = None;
        let mut pages = 0;

        loop {
            if pages >= self.settings.groups_max_pages {
                warn!(
                    pages,
                    "Stopped collecting groups at the page budget; facets may be incomplete"
                );
                break;
            }

            let scroll = ScrollQuery::new(self.settings.groups_page_size)
                .with_offset(cursor.take())
                .with_payload_fields(&[GROUP_FIELD]);
            let page = self
                .repository
                .scroll(&self.settings.collection, scroll)
                .await?;
            pages += 1;

            if page.records.is_empty() {
                break;
            }

            seen.extend(
                page.records
                    .iter()
                    .filter_map(|record| record.get(GROUP_FIELD))
                    .filter_map(|value| value.as_str())
                    .filter(|group| !group.is_empty())
                    .map(str::to_string),
            );

            match page.next_offset {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        let groups = order_groups(seen, &self.settings.group_order);
        info!(count = groups.len(), pages, "Collected category groups");
        Ok(groups)
    }

    /// Up to `limit_per_category` products for every non-empty category
    pub async fn get_featured_products(
        &self,
        limit_per_category: u32,
    ) -> CatalogResult<FeaturedProducts> {
        self.collect_featured(limit_per_category)
            .await
            .map_err(|e| CatalogError::FeaturedFailed(e.to_string()))
    }

    async fn collect_featured(&self, limit_per_category: u32) -> CatalogResult<FeaturedProducts> {
        let mut featured = FeaturedProducts::new();

        for group in self.get_groups().await? {
            let scroll = ScrollQuery::new(limit_per_category)
                .with_filter(Some(CatalogFilter::group_equals(&group)));
            let page = self
                .repository
                .scroll(&self.settings.collection, scroll)
                .await?;

            if page.records.is_empty() {
                continue;
            }
            featured.insert(group, map_payloads(&page.records)?);
        }

        info!(categories = featured.len(), "Collected featured products");
        Ok(featured)
    }
}

/// Preferred groups that were observed, in preference order, then the rest
/// sorted alphabetically.
fn order_groups(mut seen: HashSet<String>, preferred: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = preferred
        .iter()
        .filter(|group| seen.remove(group.as_str()))
        .cloned()
        .collect();

    let mut rest: Vec<String> = seen.into_iter().collect();
    rest.sort();
    ordered.extend(rest);
    ordered
}
