//! Mode indicator widget for the status bar.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::mode::Mode;

/// Displays the current interaction mode, color coded:
/// - Normal: Blue
/// - Insert: Green
/// - Command: Magenta
pub struct ModeIndicator {
    mode: Mode,
}

impl ModeIndicator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Insert => Color::Green,
            Mode::Command => Color::Magenta,
        }
    }

    /// Render as a styled span (for embedding in other widgets).
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(
            format!("[{}]", self.mode.short_code()),
            Style::default()
                .fg(Color::White)
                .bg(Self::mode_color(self.mode))
                .add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_colors() {
        assert_eq!(ModeIndicator::mode_color(Mode::Normal), Color::Blue);
        assert_eq!(ModeIndicator::mode_color(Mode::Insert), Color::Green);
        assert_eq!(ModeIndicator::mode_color(Mode::Command), Color::Magenta);
    }

    #[test]
    fn test_span_text() {
        let span = ModeIndicator::new(Mode::Insert).as_span();
        assert_eq!(span.content, "[INS]");
    }
}
