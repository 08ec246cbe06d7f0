//! Artic Core - artwork table browsing over the Art Institute of Chicago API
//!
//! This crate provides everything below the screen:
//!
//! - **Record**: artwork rows and their table cells
//! - **Api**: response schema for `GET /artworks?page=&limit=`, validated at the boundary
//! - **Source**: the [`ArtworkSource`] seam, the reqwest-backed [`ArticSource`], and an in-memory source
//! - **State**: [`TableState`], the [`update`] function, page window, selection set, bulk popover
//! - **Loader**: runs [`Effect`]s against a source and feeds results back as [`Msg`]s
//! - **Config**: API endpoint, page size, and logging settings
//!
//! # Request ordering
//!
//! Every fetch carries a [`RequestToken`]. A response is applied only if its
//! token is still the latest issued for its kind (page load or bulk select),
//! so slow responses can never overwrite newer ones.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod record;
pub mod source;
pub mod state;

pub use api::{ArtworkPage, Pagination};
pub use config::{ApiConfig, ArticConfig, ConfigError, LoggingConfig, TableConfig};
pub use error::{ArticError, FetchError, Result};
pub use loader::{dispatch, run_effect};
pub use record::{Artwork, ArtworkId, COLUMNS};
pub use source::{ArticSource, ArtworkSource, MemorySource};
pub use state::{
    parse_row_count, update, BulkPopover, Effect, Msg, PageState, RequestToken, SelectionSet,
    TableState,
};

/// Returns the version of artic-core
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
