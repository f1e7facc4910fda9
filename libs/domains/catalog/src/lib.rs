//! Fashion Catalog Domain Library
//!
//! Semantic product search over a fashion catalog stored in Qdrant. Query
//! text is embedded locally with a CLIP text encoder; requests without text
//! fall back to a filtered listing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  CatalogService  │  ← search, groups, featured products
//! └────────┬─────────┘
//!          │
//! ┌────────▼──────────┐     ┌───────────────────┐
//! │ CatalogRepository │     │ EmbeddingProvider │
//! │     (trait)       │     │     (trait)       │
//! └────────┬──────────┘     └────────┬──────────┘
//!          │                         │
//! ┌────────▼──────────┐     ┌────────▼──────────┐
//! │ QdrantRepository  │     │ FastEmbedProvider │
//! └───────────────────┘     └───────────────────┘
//! ```
//!
//! Facet filters are built by [`filter::CatalogFilter`]; store payloads are
//! shaped into [`SearchResult`] records by [`mapper`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use core_config::FromEnv;
//! use domain_catalog::{
//!     CatalogQuery, CatalogService, CatalogSettings, EncoderConfig, FastEmbedProvider,
//!     QdrantConfig, QdrantRepository,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let qdrant = QdrantConfig::from_env()?;
//! let repository = QdrantRepository::new(&qdrant)?;
//! let encoder = Arc::new(FastEmbedProvider::new(&EncoderConfig::from_env()?)?);
//! let settings = CatalogSettings::from_env_for(&qdrant)?;
//!
//! let service = CatalogService::connect(repository, encoder, settings).await?;
//! let results = service
//!     .search(&CatalogQuery::new("denim jacket").with_groups(vec!["Ladieswear".into()]))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod embedding;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod qdrant;
pub mod repository;
pub mod service;
pub mod settings;

// Re-export commonly used types
pub use embedding::{EmbeddingProvider, EncoderConfig, FastEmbedProvider, TextModel};
pub use error::{CatalogError, CatalogResult};
pub use filter::CatalogFilter;
pub use handlers::{ApiDoc as CatalogApiDoc, CatalogState, StartupReport};
pub use models::{
    CatalogQuery, CollectionInfo, CollectionStatus, FeaturedProducts, Payload, PointCursor,
    ScrollPage, ScrollQuery, SearchQuery, SearchResult,
};
pub use qdrant::{QdrantConfig, QdrantRepository};
pub use repository::CatalogRepository;
pub use service::CatalogService;
pub use settings::CatalogSettings;
