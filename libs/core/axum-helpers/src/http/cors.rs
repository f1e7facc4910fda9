use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for the configured origins.
///
/// A listed origin set allows credentials; `*` allows any origin without
/// credentials, since browsers reject the combination.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    if config.allows_any() {
        return Ok(layer.allow_origin(Any).allow_headers(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS origin: {}", e),
            )
        })?;

    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_origins() {
        let config = CorsConfig::new(vec![
            "http://localhost:3000".to_string(),
            "https://shop.example.com".to_string(),
        ]);
        assert!(create_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_wildcard_origin() {
        let config = CorsConfig::new(vec!["*".to_string()]);
        assert!(create_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = CorsConfig::new(vec!["http://bad\norigin".to_string()]);
        let err = create_cors_layer(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
