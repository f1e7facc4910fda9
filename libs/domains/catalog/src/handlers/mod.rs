mod catalog;
mod status;

use std::sync::Arc;

use axum::{Router, routing::get};
use utoipa::OpenApi;

use crate::error::CatalogError;
use crate::models::{CollectionInfo, CollectionStatus, SearchResult};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

pub use catalog::{FeaturedParams, SearchParams};
pub use status::{
    CollectionSummary, DiagnosticResponse, EnvironmentSnapshot, HealthStatus, RootHealthResponse,
    StartupReport,
};

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::search,
        catalog::groups,
        catalog::featured,
        status::root,
        status::diagnostic,
        status::ready,
    ),
    components(
        schemas(
            SearchResult, CollectionInfo, CollectionStatus,
            RootHealthResponse, HealthStatus, DiagnosticResponse, CollectionSummary,
            EnvironmentSnapshot
        )
    ),
    tags(
        (name = "catalog", description = "Fashion catalog search"),
        (name = "status", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

/// Shared handler state.
///
/// `service` is `None` when startup failed; data endpoints then answer 503
/// and the status endpoints report why.
pub struct CatalogState<R: CatalogRepository> {
    pub service: Option<Arc<CatalogService<R>>>,
    pub report: StartupReport,
}

impl<R: CatalogRepository> Clone for CatalogState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            report: self.report.clone(),
        }
    }
}

impl<R: CatalogRepository> CatalogState<R> {
    pub fn ready(service: CatalogService<R>, report: StartupReport) -> Self {
        Self {
            service: Some(Arc::new(service)),
            report,
        }
    }

    pub fn degraded(report: StartupReport) -> Self {
        Self {
            service: None,
            report,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.service.is_some()
    }

    pub(crate) fn service(&self) -> Result<&CatalogService<R>, CatalogError> {
        self.service
            .as_deref()
            .ok_or_else(|| CatalogError::Unavailable("Qdrant service is not available".to_string()))
    }
}

/// Prefix the web frontend uses for the same endpoints
pub const MIRROR_PREFIX: &str = "/api/py";

fn routes<R: CatalogRepository + 'static>() -> Router<Arc<CatalogState<R>>> {
    Router::new()
        .route("/", get(status::root::<R>))
        .route("/search", get(catalog::search::<R>))
        .route("/groups", get(catalog::groups::<R>))
        .route("/featured", get(catalog::featured::<R>))
        .route("/diagnostic", get(status::diagnostic::<R>))
        .route("/ready", get(status::ready::<R>))
}

/// Create the catalog router, mounted at the root only
pub fn router<R: CatalogRepository + 'static>(state: CatalogState<R>) -> Router {
    routes::<R>().with_state(Arc::new(state))
}

/// Catalog endpoints at the root and again under [`MIRROR_PREFIX`].
///
/// The mirrored status summary answers both `/api/py` and `/api/py/`.
pub fn catalog_routes<R: CatalogRepository + 'static>(state: CatalogState<R>) -> Router {
    Router::new()
        .merge(routes::<R>())
        .nest(MIRROR_PREFIX, routes::<R>())
        .route(&format!("{}/", MIRROR_PREFIX), get(status::root::<R>))
        .with_state(Arc::new(state))
}
