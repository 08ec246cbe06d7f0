//! Table state aggregate

use std::fmt;

use crate::record::Artwork;

use super::{BulkPopover, PageState, SelectionSet};

/// Sequence number attached to every fetch.
///
/// Tokens only grow, so a response is current exactly when its token equals
/// the latest one issued for its request class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the table screen renders from
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// Records of the current page
    pub records: Vec<Artwork>,
    /// Pagination window
    pub page: PageState,
    /// Selected records, across pages
    pub selection: SelectionSet,
    /// Bulk selector popover
    pub popover: BulkPopover,
    /// Whether a page load is outstanding
    pub loading: bool,
    /// Last fetch failure, shown in the status bar
    pub last_error: Option<String>,
    /// Offset of the page `records` actually hold
    loaded_first: u64,
    next_token: u64,
    latest_page: Option<RequestToken>,
    latest_bulk: Option<RequestToken>,
}

impl TableState {
    pub fn new(page_size: u32) -> Self {
        Self {
            records: Vec::new(),
            page: PageState::new(page_size),
            selection: SelectionSet::new(),
            popover: BulkPopover::default(),
            loading: false,
            last_error: None,
            loaded_first: 0,
            next_token: 0,
            latest_page: None,
            latest_bulk: None,
        }
    }

    /// Issue a token for a page load, superseding earlier ones
    pub(crate) fn issue_page_token(&mut self) -> RequestToken {
        let token = self.next_token();
        self.latest_page = Some(token);
        token
    }

    /// Issue a token for a bulk select, superseding earlier ones
    pub(crate) fn issue_bulk_token(&mut self) -> RequestToken {
        let token = self.next_token();
        self.latest_bulk = Some(token);
        token
    }

    fn next_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    pub fn is_current_page(&self, token: RequestToken) -> bool {
        self.latest_page == Some(token)
    }

    pub fn is_current_bulk(&self, token: RequestToken) -> bool {
        self.latest_bulk == Some(token)
    }

    /// Whether a bulk select is outstanding
    pub fn bulk_pending(&self) -> bool {
        self.latest_bulk.is_some()
    }

    /// The requested page arrived; it is now what the table shows
    pub(crate) fn commit_page(&mut self) {
        self.loaded_first = self.page.first;
    }

    /// The requested page never arrived; point the window back at the
    /// records still on screen
    pub(crate) fn revert_page(&mut self) {
        self.page.first = self.loaded_first;
    }

    pub(crate) fn finish_bulk(&mut self) {
        self.latest_bulk = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_supersede_per_class() {
        let mut state = TableState::new(12);

        let page_a = state.issue_page_token();
        let bulk = state.issue_bulk_token();
        let page_b = state.issue_page_token();

        assert!(page_a < bulk && bulk < page_b);
        assert!(!state.is_current_page(page_a));
        assert!(state.is_current_page(page_b));
        assert!(state.is_current_bulk(bulk));
        assert!(state.bulk_pending());

        state.finish_bulk();
        assert!(!state.is_current_bulk(bulk));
    }
}
