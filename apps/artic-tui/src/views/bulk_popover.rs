//! "Select first N rows" popover, opened from the checkbox column

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use artic_core::BulkPopover;

pub struct BulkPopoverView;

impl BulkPopoverView {
    const WIDTH: u16 = 34;
    const HEIGHT: u16 = 7;

    /// Popover area anchored under the checkbox column header
    pub fn area(table: Rect) -> Rect {
        Rect {
            x: table.x + 1,
            y: table.y + 2,
            width: Self::WIDTH.min(table.width.saturating_sub(1)),
            height: Self::HEIGHT.min(table.height.saturating_sub(2)),
        }
    }

    pub fn render(frame: &mut Frame, table: Rect, popover: &BulkPopover) {
        let input = if popover.input.is_empty() {
            Span::styled("Number of rows...", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(popover.input.clone())
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw(" > "),
                input,
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " [Enter] Apply",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  [Esc] Close"),
            ]),
        ];

        let block = Block::default()
            .title("Set selected rows")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let area = Self::area(table);
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_fits_small_tables() {
        let area = BulkPopoverView::area(Rect::new(0, 1, 20, 5));
        assert_eq!(area.width, 19);
        assert_eq!(area.height, 3);
    }
}
