//! Ordered selection of artworks, keyed by id

use std::collections::HashSet;

use crate::record::{Artwork, ArtworkId};

/// Records currently marked selected.
///
/// Insertion order is kept so bulk selections stay in response order.
/// An id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<Artwork>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records, dropping repeated ids
    pub fn from_records(records: impl IntoIterator<Item = Artwork>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert(record);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.items.iter().any(|r| r.id == id)
    }

    pub fn ids(&self) -> Vec<ArtworkId> {
        self.items.iter().map(|r| r.id).collect()
    }

    /// Add a record; returns false if its id was already selected
    pub fn insert(&mut self, record: Artwork) -> bool {
        if self.contains(record.id) {
            return false;
        }
        self.items.push(record);
        true
    }

    /// Remove by id; returns false if it was not selected
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }

    /// Flip a single record; returns whether it is selected afterwards
    pub fn toggle(&mut self, record: &Artwork) -> bool {
        if self.remove(record.id) {
            false
        } else {
            self.items.push(record.clone());
            true
        }
    }

    /// Header checkbox behavior: if every record on the page is selected,
    /// deselect them all, otherwise select the missing ones in page order.
    pub fn toggle_page(&mut self, page: &[Artwork]) {
        if page.is_empty() {
            return;
        }

        if self.all_selected(page) {
            let ids: HashSet<ArtworkId> = page.iter().map(|r| r.id).collect();
            self.items.retain(|r| !ids.contains(&r.id));
        } else {
            for record in page {
                self.insert(record.clone());
            }
        }
    }

    /// Whether every record on the page is selected
    pub fn all_selected(&self, page: &[Artwork]) -> bool {
        page.iter().all(|r| self.contains(r.id))
    }

    /// How many records on the page are selected
    pub fn count_on(&self, page: &[Artwork]) -> usize {
        page.iter().filter(|r| self.contains(r.id)).count()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
