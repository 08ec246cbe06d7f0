//! TUI widgets

mod mode_indicator;
mod status_bar;

pub use mode_indicator::ModeIndicator;
pub use status_bar::StatusBar;
