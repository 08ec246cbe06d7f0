//! Response schema for `GET {base}/artworks?page={n}&limit={m}`
//!
//! The JSON envelope is validated here so that the rest of the crate only
//! ever sees a well-formed [`ArtworkPage`].

use serde::Deserialize;
use url::Url;

use crate::error::FetchError;
use crate::record::Artwork;

/// Pagination block of the envelope. Only `total` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub next_url: Option<String>,
}

/// One validated page of artworks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworkPage {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

impl ArtworkPage {
    /// Build a page directly (used by in-memory sources)
    pub fn new(data: Vec<Artwork>, total: u64) -> Self {
        Self {
            data,
            pagination: Pagination {
                total,
                limit: None,
                offset: None,
                total_pages: None,
                current_page: None,
                next_url: None,
            },
        }
    }

    /// Total number of records the API reports
    pub fn total(&self) -> u64 {
        self.pagination.total
    }
}

/// Parse and validate an artworks response body
pub fn parse_artworks(body: &str) -> Result<ArtworkPage, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::malformed(e.to_string()))
}

/// Build the artworks URL for a one-based page number
pub fn artworks_url(base: &Url, page: u32, limit: u32) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .push("artworks");
    url.query_pairs_mut()
        .append_pair("page", &page.to_string())
        .append_pair("limit", &limit.to_string());
    Ok(url)
}
