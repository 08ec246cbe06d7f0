//! Help overlay

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

const HELP_TEXT: &str = r#"
Artic - Help

Navigation:
  j/k       - Move up/down in the page
  h/l       - Previous/next page (also p/n, arrows, PgUp/PgDn)
  g/G       - First/last page
  r         - Reload current page

Selection:
  Space     - Toggle row under cursor
  a         - Toggle every row on the page
  x         - Clear selection
  s         - Select first N rows (popover)

Commands (: to enter command mode):
  :page <n>    - Jump to page n
  :select <n>  - Select the first n rows
  :clear       - Clear selection
  :reload      - Reload current page
  :q           - Quit

Other:
  ?         - Toggle this help
  q         - Quit
"#;

pub struct HelpView;

impl HelpView {
    pub fn render(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!("Help (artic-core {})", artic_core::version()))
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(HELP_TEXT).block(block), help_area);
    }
}
