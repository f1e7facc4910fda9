//! Health, readiness and diagnostic endpoints

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::CatalogState;
use crate::embedding::EncoderConfig;
use crate::models::{CollectionInfo, CollectionStatus};
use crate::qdrant::QdrantConfig;
use crate::repository::CatalogRepository;

const API_MESSAGE: &str = "H&M Fashion Search API is running";
const NOT_SET: &str = "not set";

/// Configuration observed at startup plus the reason initialization failed, if it did
#[derive(Debug, Clone)]
pub struct StartupReport {
    pub qdrant_url: String,
    pub qdrant_api_key_provided: bool,
    pub collection: String,
    pub text_model: String,
    pub environment: EnvironmentSnapshot,
    pub init_error: Option<String>,
}

impl StartupReport {
    pub fn new(qdrant: &QdrantConfig, encoder: &EncoderConfig) -> Self {
        Self {
            qdrant_url: qdrant.url.clone(),
            qdrant_api_key_provided: qdrant.api_key.is_some(),
            collection: qdrant.collection.clone(),
            text_model: encoder.model.model_name().to_string(),
            environment: EnvironmentSnapshot::capture(),
            init_error: None,
        }
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.init_error = Some(error.to_string());
        self
    }
}

/// Raw connection variables as set in the process environment; the API key is masked
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnvironmentSnapshot {
    #[serde(rename = "QDRANT_URL")]
    pub qdrant_url: String,
    #[serde(rename = "QDRANT_API_KEY")]
    pub qdrant_api_key: String,
    #[serde(rename = "QDRANT_COLLECTION")]
    pub qdrant_collection: String,
}

impl EnvironmentSnapshot {
    pub fn capture() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        Self {
            qdrant_url: var("QDRANT_URL").unwrap_or_else(|| NOT_SET.to_string()),
            qdrant_api_key: match var("QDRANT_API_KEY") {
                Some(_) => "provided".to_string(),
                None => NOT_SET.to_string(),
            },
            qdrant_collection: var("QDRANT_COLLECTION").unwrap_or_else(|| NOT_SET.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RootHealthResponse {
    pub status: HealthStatus,
    pub message: String,
    pub qdrant_url: String,
    pub collection: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CollectionSummary {
    pub status: CollectionStatus,
    pub points_count: u64,
    pub indexed_vectors_count: u64,
    pub vector_size: u64,
}

impl From<CollectionInfo> for CollectionSummary {
    fn from(info: CollectionInfo) -> Self {
        Self {
            status: info.status,
            points_count: info.points_count,
            indexed_vectors_count: info.indexed_vectors_count,
            vector_size: info.vector_size,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticResponse {
    pub app_status: String,
    /// `initialized` or `failed_to_initialize`
    pub qdrant_service: String,
    pub qdrant_url: String,
    pub qdrant_api_key_provided: bool,
    pub collection_name: String,
    pub text_model: String,
    pub environment_variables: EnvironmentSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialization_error: Option<String>,
    /// `ok` or `error`, present once the service is initialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qdrant_connection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_info: Option<CollectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qdrant_error: Option<String>,
}

/// Service status summary
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service status", body = RootHealthResponse)
    )
)]
pub async fn root<R: CatalogRepository>(
    State(state): State<Arc<CatalogState<R>>>,
) -> Json<RootHealthResponse> {
    let status = if state.is_ready() {
        HealthStatus::Ok
    } else {
        HealthStatus::Degraded
    };

    Json(RootHealthResponse {
        status,
        message: API_MESSAGE.to_string(),
        qdrant_url: state.report.qdrant_url.clone(),
        collection: state.report.collection.clone(),
    })
}

/// Configuration and store reachability report
#[utoipa::path(
    get,
    path = "/diagnostic",
    tag = "status",
    responses(
        (status = 200, description = "Diagnostic report", body = DiagnosticResponse)
    )
)]
pub async fn diagnostic<R: CatalogRepository>(
    State(state): State<Arc<CatalogState<R>>>,
) -> Json<DiagnosticResponse> {
    let report = &state.report;
    let mut response = DiagnosticResponse {
        app_status: "ok".to_string(),
        qdrant_service: "failed_to_initialize".to_string(),
        qdrant_url: report.qdrant_url.clone(),
        qdrant_api_key_provided: report.qdrant_api_key_provided,
        collection_name: report.collection.clone(),
        text_model: report.text_model.clone(),
        environment_variables: report.environment.clone(),
        initialization_error: report.init_error.clone(),
        qdrant_connection: None,
        collection_info: None,
        qdrant_error: None,
    };

    let Some(service) = &state.service else {
        return Json(response);
    };

    response.qdrant_service = "initialized".to_string();
    match service.collection_info().await {
        Ok(Some(info)) => {
            response.qdrant_connection = Some("ok".to_string());
            response.collection_info = Some(info.into());
        }
        Ok(None) => {
            response.qdrant_connection = Some("error".to_string());
            response.qdrant_error = Some(format!(
                "Collection {} not found",
                service.collection_name()
            ));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Diagnostic collection lookup failed");
            response.qdrant_connection = Some("error".to_string());
            response.qdrant_error = Some(e.to_string());
        }
    }

    Json(response)
}

/// Readiness probe: the service is initialized and the collection reachable
#[utoipa::path(
    get,
    path = "/ready",
    tag = "status",
    responses(
        (status = 200, description = "Ready"),
        (status = 503, description = "Not ready")
    )
)]
pub async fn ready<R: CatalogRepository>(
    State(state): State<Arc<CatalogState<R>>>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let check: HealthCheckFuture<'_> = Box::pin(async {
        let service = state.service().map_err(|e| e.to_string())?;
        match service.collection_info().await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(format!("Collection {} not found", service.collection_name())),
            Err(e) => Err(e.to_string()),
        }
    });

    run_health_checks(vec![("qdrant", check)]).await
}
