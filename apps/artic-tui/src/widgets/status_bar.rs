//! Top status bar: mode, fetch activity, selection count, last error

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use artic_core::TableState;

use super::ModeIndicator;
use crate::mode::Mode;

pub struct StatusBar<'a> {
    mode: Mode,
    state: &'a TableState,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: Mode, state: &'a TableState) -> Self {
        Self { mode, state }
    }

    pub fn line(&self) -> Line<'static> {
        let (activity, color) = if self.state.loading {
            ("loading", Color::Yellow)
        } else if self.state.bulk_pending() {
            ("selecting", Color::Yellow)
        } else {
            ("idle", Color::Green)
        };

        let mut spans = vec![
            Span::raw(" "),
            ModeIndicator::new(self.mode).as_span(),
            Span::raw(" "),
            Span::styled(activity, Style::default().fg(color)),
            Span::raw(format!(" | {} selected ", self.state.selection.len())),
        ];

        if let Some(error) = &self.state.last_error {
            spans.push(Span::raw("| "));
            spans.push(Span::styled(error.clone(), Style::default().fg(Color::Red)));
        }

        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bar = Paragraph::new(self.line()).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_shows_error() {
        let mut state = TableState::new(12);
        state.last_error = Some("Error loading artworks: Rate limited".to_string());
        let line = StatusBar::new(Mode::Normal, &state).line();
        let text = text(&line);
        assert!(text.contains("[NOR]"));
        assert!(text.contains("0 selected"));
        assert!(text.contains("Rate limited"));
    }

    #[test]
    fn test_loading_activity() {
        let mut state = TableState::new(12);
        state.loading = true;
        assert!(text(&StatusBar::new(Mode::Normal, &state).line()).contains("loading"));
    }
}
