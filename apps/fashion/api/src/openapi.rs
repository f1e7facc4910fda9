use domain_catalog::CatalogApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "H&M Fashion Search API",
        version = "0.1.0",
        description = "Semantic product search over the fashion catalog"
    ),
    servers(
        (url = "/", description = "Root mount"),
        (url = "/api/py", description = "Mirrored mount for the web frontend")
    )
)]
struct ApiInfo;

/// Service metadata plus the catalog paths.
///
/// The catalog routes are served under both mounts, so they are merged
/// rather than nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ApiInfo::openapi();
        doc.merge(CatalogApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_paths_are_documented() {
        let doc = ApiDoc::openapi();

        for path in ["/search", "/groups", "/featured", "/diagnostic", "/"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(doc.info.title, "H&M Fashion Search API");
    }
}
