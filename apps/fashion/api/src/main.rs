use std::sync::Arc;

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::{
    CatalogError, CatalogResult, CatalogService, CatalogState, FastEmbedProvider,
    QdrantRepository, StartupReport, handlers,
};
use tracing::{error, info};

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        qdrant_url = %config.qdrant.url,
        collection = %config.qdrant.collection,
        api_key_provided = config.qdrant.api_key.is_some(),
        "Initializing catalog service"
    );

    // Startup failure keeps the status endpoints up; data endpoints answer 503
    let report = StartupReport::new(&config.qdrant, &config.encoder);
    let state = match init_catalog(&config).await {
        Ok(service) => CatalogState::ready(service, report),
        Err(e) => {
            error!(error = %e, "Catalog service failed to initialize, serving in degraded mode");
            CatalogState::degraded(report.with_error(&e))
        }
    };

    let api_routes = handlers::catalog_routes(state);

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &config.cors)?
        .merge(health_router(config.app));

    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        config.app.name, config.app.version, config.server.shutdown_timeout
    );

    create_production_app(router, &config.server, async {
        info!("Shutting down: no connections to close");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Fashion API shutdown complete");
    Ok(())
}

/// Connect to Qdrant, load the text encoder and check the collection
async fn init_catalog(config: &Config) -> CatalogResult<CatalogService<QdrantRepository>> {
    let repository = QdrantRepository::new(&config.qdrant)?;

    let encoder_config = config.encoder.clone();
    let encoder = tokio::task::spawn_blocking(move || FastEmbedProvider::new(&encoder_config))
        .await
        .map_err(|e| CatalogError::Embedding(format!("Encoder loading task failed: {}", e)))??;

    CatalogService::connect(repository, Arc::new(encoder), config.catalog.clone()).await
}
