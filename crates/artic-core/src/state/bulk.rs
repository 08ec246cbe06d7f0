//! Bulk selector popover: "select the first N rows"

/// Popover state. The input survives closing and reopening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkPopover {
    pub open: bool,
    pub input: String,
}

impl BulkPopover {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Parse the row count typed into the popover.
///
/// Returns `None` for anything that is not a positive integer, which the
/// caller ignores without reporting.
pub fn parse_row_count(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(count) => Some(count),
    }
}
