//! Remote data sources for artwork pages
//!
//! [`ArtworkSource`] is the seam between the table state and the network.
//! [`ArticSource`] talks to the real API; [`MemorySource`] serves pages from
//! a fixed record list and is what tests and offline runs use.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::api::{artworks_url, parse_artworks, ArtworkPage};
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::http::HttpClient;
use crate::record::Artwork;

/// Anything that can serve one-based pages of artworks
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Fetch page `page` (one-based) holding at most `limit` records
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage, FetchError>;
}

/// Source backed by the Art Institute of Chicago REST API
pub struct ArticSource {
    client: HttpClient,
    base_url: Url,
}

impl ArticSource {
    pub fn new(client: HttpClient, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url).map_err(|_| FetchError::InvalidUrl {
            url: config.base_url.clone(),
        })?;
        Ok(Self::new(HttpClient::from_config(config)?, base_url))
    }
}

#[async_trait]
impl ArtworkSource for ArticSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage, FetchError> {
        let url = artworks_url(&self.base_url, page, limit)?;
        tracing::debug!(%url, "fetching artworks");

        let response = self.client.get(&url).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                url: url.to_string(),
            });
        }

        parse_artworks(&response.body)
    }
}

/// In-memory source over a fixed record list
pub struct MemorySource {
    records: Vec<Artwork>,
    failing: AtomicBool,
    requests: Mutex<Vec<(u32, u32)>>,
}

impl MemorySource {
    pub fn new(records: Vec<Artwork>) -> Self {
        Self {
            records,
            failing: AtomicBool::new(false),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `count` synthetic records with ids `1..=count`
    pub fn synthetic(count: u64) -> Self {
        Self::new(
            (1..=count)
                .map(|id| Artwork::new(id, format!("Artwork {}", id)))
                .collect(),
        )
    }

    /// Make every subsequent fetch fail with a network error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// `(page, limit)` of every fetch so far
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ArtworkSource for MemorySource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((page, limit));
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::Network {
                message: "connection refused".to_string(),
            });
        }

        let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
        let data = self
            .records
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(ArtworkPage::new(data, self.records.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_pages() {
        let source = MemorySource::synthetic(30);

        let first = source.fetch_page(1, 12).await.unwrap();
        assert_eq!(first.data.len(), 12);
        assert_eq!(first.data[0].id, 1);
        assert_eq!(first.total(), 30);

        let last = source.fetch_page(3, 12).await.unwrap();
        assert_eq!(last.data.len(), 6);
        assert_eq!(last.data[0].id, 25);

        assert_eq!(source.requests(), vec![(1, 12), (3, 12)]);
    }

    #[tokio::test]
    async fn test_memory_source_failing() {
        let source = MemorySource::synthetic(5);
        source.set_failing(true);
        let err = source.fetch_page(1, 12).await.unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
    }

    #[test]
    fn test_artic_source_rejects_bad_base() {
        let config = ApiConfig {
            base_url: "::".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            ArticSource::from_config(&config),
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
