pub mod decode;
pub mod enrich;
pub mod gateway;
pub mod genre_cache;
pub mod provider;
pub mod tmdb;

use thiserror::Error;

pub use gateway::CatalogGateway;
pub use genre_cache::GenreCache;
pub use tmdb::{TmdbClient, TmdbConfig};

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    #[error("decode error: {0}")]
    Decode(String),
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl From<serde_json::Error> for MetadataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
