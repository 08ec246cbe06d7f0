//! Artwork records as returned by the `/artworks` endpoint

use serde::{Deserialize, Serialize};

/// Stable artwork identifier
pub type ArtworkId = u64;

/// One artwork entry.
///
/// Only `id` is guaranteed by the API; every other field is frequently
/// `null` and renders as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscription: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Create a record with only an id and title
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscription: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Cell text for each table column, in column order
    pub fn cells(&self) -> [String; 6] {
        fn text(value: &Option<String>) -> String {
            value.as_deref().unwrap_or_default().replace('\n', " ")
        }
        fn year(value: Option<i64>) -> String {
            value.map(|y| y.to_string()).unwrap_or_default()
        }

        [
            text(&self.title),
            text(&self.place_of_origin),
            text(&self.artist_display),
            text(&self.inscription),
            year(self.date_start),
            year(self.date_end),
        ]
    }
}

/// Table column headers, matching [`Artwork::cells`]
pub const COLUMNS: [&str; 6] = [
    "Title",
    "Origin",
    "Artist",
    "Inscription",
    "Start Year",
    "End Year",
];
