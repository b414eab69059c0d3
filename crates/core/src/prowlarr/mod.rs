//! Prowlarr indexer discovery.
//!
//! Prowlarr groups indexers under tags. At startup the tag details are read
//! once and the indexers carrying the configured tag are turned into Torznab
//! endpoints that cross-seed can search directly.

mod client;
mod loader;
mod types;

pub use client::ProwlarrClient;
pub use loader::{fetch_indexers, select_indexer_ids, tag_detail_url, torznab_endpoint};
pub use types::TagRecord;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while reading the indexer feed.
///
/// Every variant is fatal to configuration loading. A tag that matches
/// nothing is not an error.
#[derive(Debug, Clone, Error)]
pub enum IndexerFeedError {
    /// DNS, connection, timeout or body read failure.
    #[error("Failed to reach Prowlarr: {0}")]
    Transport(String),

    /// Prowlarr answered with a non-success status.
    #[error("Prowlarr returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response could not be understood.
    #[error("Malformed tag details from Prowlarr: {0}")]
    Malformed(String),

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Source of the raw `/api/v1/tag/detail` document.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Fetch the full response body at `url`.
    ///
    /// Implementations make a single attempt and only return `Ok` for a
    /// successful response whose body was read completely.
    async fn fetch_tag_details(&self, url: &str) -> Result<String, IndexerFeedError>;
}
