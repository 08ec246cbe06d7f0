//! Sources with scripted latency for ordering tests

use std::time::Duration;

use artic_core::{ArtworkPage, ArtworkSource, FetchError, MemorySource};
use async_trait::async_trait;

/// Wraps a [`MemorySource`] and delays each page by a per-page amount
pub struct SlowSource {
    inner: MemorySource,
    delays: Vec<(u32, Duration)>,
}

impl SlowSource {
    pub fn new(inner: MemorySource, delays: Vec<(u32, Duration)>) -> Self {
        Self { inner, delays }
    }
}

#[async_trait]
impl ArtworkSource for SlowSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage, FetchError> {
        if let Some((_, delay)) = self.delays.iter().find(|(p, _)| *p == page) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.fetch_page(page, limit).await
    }
}
