mod client;
mod config;

pub use client::QdrantRepository;
pub use config::{DEFAULT_COLLECTION, DEFAULT_URL, QdrantConfig};
