mod config;
mod local;
mod provider;

pub use config::{EncoderConfig, TextModel};
pub use local::FastEmbedProvider;
pub use provider::EmbeddingProvider;
#[cfg(test)]
pub use provider::MockEmbeddingProvider;
