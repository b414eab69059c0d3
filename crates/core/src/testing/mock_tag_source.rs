//! Mock tag source for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::prowlarr::{IndexerFeedError, TagSource};

/// Mock implementation of the TagSource trait.
///
/// Serves a fixed body (or a fixed error) and records every URL requested,
/// so tests can assert that exactly one fetch happened and what it asked for.
///
/// # Example
///
/// ```rust,ignore
/// use crossconf_core::testing::MockTagSource;
///
/// let source = MockTagSource::with_body(r#"[{"label":"cross-seed","indexerIds":[3]}]"#);
/// let indexers = fetch_indexers(&source, "http://prowlarr", "K", "cross-seed").await?;
/// assert_eq!(source.requested_urls().await.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockTagSource {
    response: Arc<RwLock<Result<String, IndexerFeedError>>>,
    requests: Arc<RwLock<Vec<String>>>,
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::with_body("[]")
    }
}

impl MockTagSource {
    /// Create a source that answers every request with `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(body.into()))),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a source that fails every request with `error`.
    pub fn with_error(error: IndexerFeedError) -> Self {
        Self {
            response: Arc::new(RwLock::new(Err(error))),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Make subsequent requests fail.
    pub async fn set_error(&self, error: IndexerFeedError) {
        *self.response.write().await = Err(error);
    }

    /// URLs requested so far, in order.
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl TagSource for MockTagSource {
    async fn fetch_tag_details(&self, url: &str) -> Result<String, IndexerFeedError> {
        self.requests.write().await.push(url.to_string());
        self.response.read().await.clone()
    }
}
