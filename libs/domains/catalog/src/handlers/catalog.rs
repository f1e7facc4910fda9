//! Catalog data endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::{Json, extract::State};
use axum_extra::extract::{Query, WithRejection};
use serde::Deserialize;
use utoipa::IntoParams;

use super::CatalogState;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CatalogQuery, FeaturedProducts, SearchResult};
use crate::repository::CatalogRepository;

/// Query string of `/search`; `group` and `item` may repeat
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text query; empty lists the catalog
    #[serde(default)]
    pub query: String,
    /// Category group filter (repeatable)
    #[serde(default)]
    pub group: Vec<String>,
    /// Product type filter (repeatable)
    #[serde(default)]
    pub item: Vec<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u32 {
    20
}

impl SearchParams {
    /// Trim and percent-decode every text parameter
    pub fn into_query(self) -> CatalogQuery {
        CatalogQuery::new(decode(&self.query))
            .with_groups(self.group.iter().map(|g| decode(g)).collect())
            .with_items(self.item.iter().map(|i| decode(i)).collect())
            .with_page(self.limit, self.offset)
    }
}

/// Values arrive already decoded once by the extractor; a second pass
/// handles clients that encode twice. Invalid sequences are kept verbatim.
fn decode(value: &str) -> String {
    let trimmed = value.trim();
    urlencoding::decode(trimmed)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| trimmed.to_string())
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeaturedParams {
    /// Products per category
    #[serde(default = "default_limit_per_category")]
    pub limit_per_category: u32,
}

fn default_limit_per_category() -> u32 {
    4
}

/// Search products by text and facets
#[utoipa::path(
    get,
    path = "/search",
    tag = "catalog",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching products, most similar first", body = Vec<SearchResult>),
        (status = 400, description = "Malformed limit or offset"),
        (status = 500, description = "Search failed"),
        (status = 503, description = "Service not initialized")
    )
)]
pub async fn search<R: CatalogRepository>(
    State(state): State<Arc<CatalogState<R>>>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, CatalogError>,
) -> CatalogResult<Json<Vec<SearchResult>>> {
    let service = state.service()?;
    let results = service.search(&params.into_query()).await?;
    Ok(Json(results))
}

/// List category groups
#[utoipa::path(
    get,
    path = "/groups",
    tag = "catalog",
    responses(
        (status = 200, description = "Category groups, preferred order first", body = Vec<String>),
        (status = 500, description = "Failed to fetch groups"),
        (status = 503, description = "Service not initialized")
    )
)]
pub async fn groups<R: CatalogRepository>(
    State(state): State<Arc<CatalogState<R>>>,
) -> CatalogResult<Json<Vec<String>>> {
    let groups = state.service()?.get_groups().await?;
    Ok(Json(groups))
}

/// Featured products per category
#[utoipa::path(
    get,
    path = "/featured",
    tag = "catalog",
    params(FeaturedParams),
    responses(
        (status = 200, description = "Products keyed by category", body = HashMap<String, Vec<SearchResult>>),
        (status = 500, description = "Failed to collect featured products"),
        (status = 503, description = "Service not initialized")
    )
)]
pub async fn featured<R: CatalogRepository>(
    State(state): State<Arc<CatalogState<R>>>,
    WithRejection(Query(params), _): WithRejection<Query<FeaturedParams>, CatalogError>,
) -> CatalogResult<Json<FeaturedProducts>> {
    let featured = state
        .service()?
        .get_featured_products(params.limit_per_category)
        .await?;
    Ok(Json(featured))
}
