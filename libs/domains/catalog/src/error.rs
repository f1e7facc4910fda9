use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Search error: {0}")]
    SearchFailed(String),

    #[error("Failed to fetch groups: {0}")]
    FetchGroupsFailed(String),

    #[error("Error getting featured products: {0}")]
    FeaturedFailed(String),

    #[error("Qdrant error: {0}")]
    Store(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Invalid payload field '{field}': {details}")]
    InvalidPayload { field: &'static str, details: String },

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<qdrant_client::QdrantError> for CatalogError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        CatalogError::Store(err.to_string())
    }
}

impl From<axum_extra::extract::QueryRejection> for CatalogError {
    fn from(rejection: axum_extra::extract::QueryRejection) -> Self {
        CatalogError::InvalidRequest(rejection.body_text())
    }
}

impl From<core_config::ConfigError> for CatalogError {
    fn from(err: core_config::ConfigError) -> Self {
        CatalogError::Config(err.to_string())
    }
}

/// Convert CatalogError to AppError for standardized HTTP error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
            CatalogError::CollectionNotFound(name) => {
                AppError::ServiceUnavailable(format!("Collection {} not found", name))
            }
            CatalogError::InvalidRequest(msg) => AppError::BadRequest(msg),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_operation_failures_map_to_500() {
        let response = CatalogError::SearchFailed("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = CatalogError::FetchGroupsFailed("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let response = CatalogError::Unavailable("Qdrant service is not available".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = CatalogError::InvalidRequest("limit: invalid digit".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_search_failed_carries_underlying_message() {
        let err = CatalogError::SearchFailed("Qdrant error: timeout".to_string());
        assert_eq!(err.to_string(), "Search error: Qdrant error: timeout");
    }
}
