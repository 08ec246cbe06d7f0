//! Pagination window over the remote record set

/// Highest zero-based page index; its one-based page number still fits a `u32`
pub const MAX_PAGE_INDEX: u32 = u32::MAX - 1;

/// Offset, total, and fixed page size of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Offset of the first row shown; always `page_index * page_size`
    pub first: u64,
    /// Total records the API reports
    pub total_count: u64,
    /// Fixed number of rows per page
    pub page_size: u32,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            first: 0,
            total_count: 0,
            page_size: page_size.max(1),
        }
    }

    /// Zero-based index of the current page
    pub fn page_index(&self) -> u32 {
        (self.first / self.page_size as u64) as u32
    }

    /// Number of pages, zero until the total is known
    pub fn page_count(&self) -> u64 {
        self.total_count.div_ceil(self.page_size as u64)
    }

    /// Zero-based index of the last page, if the total is known
    pub fn last_page_index(&self) -> Option<u32> {
        match self.page_count() {
            0 => None,
            n => Some((n - 1).min(u32::MAX as u64) as u32),
        }
    }

    /// Clamp a requested page index to the known range
    pub fn clamp(&self, page_index: u32) -> u32 {
        let last = self.last_page_index().unwrap_or(MAX_PAGE_INDEX);
        page_index.min(last.min(MAX_PAGE_INDEX))
    }

    /// Move the window to a page
    pub fn set_page(&mut self, page_index: u32) {
        self.first = page_index as u64 * self.page_size as u64;
    }

    /// Rows expected on the current page: `min(size, total - first)`
    pub fn expected_rows(&self) -> u64 {
        self.total_count
            .saturating_sub(self.first)
            .min(self.page_size as u64)
    }

    /// One-based inclusive row range shown, for the footer
    pub fn row_range(&self, shown: usize) -> Option<(u64, u64)> {
        if shown == 0 {
            return None;
        }
        Some((self.first + 1, self.first + shown as u64))
    }
}
