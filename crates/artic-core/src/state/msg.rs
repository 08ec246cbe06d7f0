//! Messages and the update function
//!
//! Every state change goes through [`update`], which consumes the current
//! [`TableState`] and returns the next one plus the fetches to start.
//! Fetch results come back as messages carrying the token they were
//! issued with.

use crate::api::ArtworkPage;
use crate::error::FetchError;
use crate::record::ArtworkId;

use super::{parse_row_count, RequestToken, SelectionSet, TableState};

/// Everything that can happen to the table
#[derive(Debug, Clone)]
pub enum Msg {
    /// Jump to a zero-based page
    ChangePage { page_index: u32 },
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Re-request the current page
    Reload,

    /// A page load finished
    PageLoaded {
        token: RequestToken,
        result: Result<ArtworkPage, FetchError>,
    },

    /// Flip the checkbox of one row
    ToggleRow { id: ArtworkId },
    /// Header checkbox: select or deselect every row on the page
    TogglePage,
    ClearSelection,

    /// Show or hide the bulk popover
    ToggleBulk,
    CloseBulk,
    /// New contents of the row count input
    EditBulkInput(String),
    /// Apply button
    ApplyBulk,
    /// A bulk select finished
    BulkLoaded {
        token: RequestToken,
        count: u32,
        result: Result<ArtworkPage, FetchError>,
    },
}

/// Fetches requested by [`update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Load page `page_index` (zero-based) into the table
    LoadPage {
        token: RequestToken,
        page_index: u32,
        page_size: u32,
    },
    /// Fetch the first `count` records and select them
    BulkSelect { token: RequestToken, count: u32 },
}

impl Effect {
    /// One-based page number and limit sent to the API
    pub fn request(&self) -> (u32, u32) {
        match *self {
            Effect::LoadPage {
                page_index,
                page_size,
                ..
            } => (page_index.saturating_add(1), page_size),
            Effect::BulkSelect { count, .. } => (1, count),
        }
    }

    pub fn token(&self) -> RequestToken {
        match *self {
            Effect::LoadPage { token, .. } | Effect::BulkSelect { token, .. } => token,
        }
    }
}

/// Apply a message, returning the next state and any fetches to start
pub fn update(mut state: TableState, msg: Msg) -> (TableState, Vec<Effect>) {
    let mut effects = Vec::new();

    match msg {
        Msg::ChangePage { page_index } => {
            effects.push(change_page(&mut state, page_index));
        }
        Msg::NextPage => {
            let next = state.page.page_index().saturating_add(1);
            if state.page.clamp(next) == next {
                effects.push(change_page(&mut state, next));
            }
        }
        Msg::PrevPage => {
            if let Some(prev) = state.page.page_index().checked_sub(1) {
                effects.push(change_page(&mut state, prev));
            }
        }
        Msg::FirstPage => {
            if state.page.page_index() != 0 {
                effects.push(change_page(&mut state, 0));
            }
        }
        Msg::LastPage => {
            if let Some(last) = state.page.last_page_index() {
                if last != state.page.page_index() {
                    effects.push(change_page(&mut state, last));
                }
            }
        }
        Msg::Reload => {
            let current = state.page.page_index();
            effects.push(change_page(&mut state, current));
        }

        Msg::PageLoaded { token, result } => {
            if !state.is_current_page(token) {
                tracing::debug!(%token, "dropping stale page response");
                return (state, effects);
            }
            state.loading = false;
            match result {
                Ok(page) => {
                    state.page.total_count = page.total();
                    state.records = page.data;
                    state.last_error = None;
                    state.commit_page();
                }
                Err(e) => {
                    tracing::error!(%token, error = %e, "Error loading artworks");
                    state.revert_page();
                    state.last_error = Some(format!("Error loading artworks: {}", e));
                }
            }
        }

        Msg::ToggleRow { id } => {
            if let Some(record) = state.records.iter().find(|r| r.id == id) {
                state.selection.toggle(record);
            } else {
                state.selection.remove(id);
            }
        }
        Msg::TogglePage => {
            state.selection.toggle_page(&state.records);
        }
        Msg::ClearSelection => {
            state.selection.clear();
        }

        Msg::ToggleBulk => state.popover.toggle(),
        Msg::CloseBulk => state.popover.open = false,
        Msg::EditBulkInput(input) => state.popover.input = input,
        Msg::ApplyBulk => {
            match parse_row_count(&state.popover.input) {
                Some(count) => {
                    let token = state.issue_bulk_token();
                    tracing::debug!(%token, count, "bulk select requested");
                    effects.push(Effect::BulkSelect { token, count });
                }
                None => {
                    tracing::debug!(input = %state.popover.input, "ignoring invalid row count");
                }
            }
            state.popover.open = false;
        }
        Msg::BulkLoaded {
            token,
            count,
            result,
        } => {
            if !state.is_current_bulk(token) {
                tracing::debug!(%token, "dropping stale bulk response");
                return (state, effects);
            }
            state.finish_bulk();
            match result {
                Ok(page) => {
                    state.selection =
                        SelectionSet::from_records(page.data.into_iter().take(count as usize));
                    state.last_error = None;
                }
                Err(e) => {
                    tracing::error!(%token, error = %e, "Error fetching artworks for selection");
                    state.last_error =
                        Some(format!("Error fetching artworks for selection: {}", e));
                }
            }
        }
    }

    (state, effects)
}

fn change_page(state: &mut TableState, page_index: u32) -> Effect {
    let page_index = state.page.clamp(page_index);
    state.page.set_page(page_index);
    state.loading = true;

    let token = state.issue_page_token();
    tracing::debug!(%token, page_index, "page change");
    Effect::LoadPage {
        token,
        page_index,
        page_size: state.page.page_size,
    }
}
