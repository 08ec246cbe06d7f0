//! Table state and the update function
//!
//! The table screen is driven by a single [`TableState`] value that only
//! changes through [`update`]. Fetches are described as [`Effect`]s and
//! their results are fed back in as [`Msg`]s.

mod bulk;
mod msg;
mod page;
mod selection;
mod table;

pub use bulk::{parse_row_count, BulkPopover};
pub use msg::{update, Effect, Msg};
pub use page::{PageState, MAX_PAGE_INDEX};
pub use selection::SelectionSet;
pub use table::{RequestToken, TableState};
