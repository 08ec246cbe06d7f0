//! Artwork table: checkbox column, record columns, pagination footer
//!
//! An empty page renders a loading indicator instead of the table.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState as RowCursor},
    Frame,
};

use artic_core::{TableState, COLUMNS};

use super::group_digits;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Table view state
pub struct TableView {
    /// Highlighted row on the current page
    pub cursor: usize,
}

impl TableView {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Move the cursor down, wrapping within the page
    pub fn next_row(&mut self, rows: usize) {
        if rows > 0 {
            self.cursor = (self.cursor + 1) % rows;
        }
    }

    /// Move the cursor up, wrapping within the page
    pub fn prev_row(&mut self, rows: usize) {
        if rows > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(rows - 1);
        }
    }

    /// Keep the cursor on an existing row after the page changes
    pub fn clamp(&mut self, rows: usize) {
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Render the table view
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &TableState, tick: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        if state.records.is_empty() {
            self.render_loading(frame, chunks[0], state, tick);
        } else {
            self.render_rows(frame, chunks[0], state);
        }

        self.render_footer(frame, chunks[1], state);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, state: &TableState, tick: usize) {
        let spinner = SPINNER[tick % SPINNER.len()];
        let mut lines = vec![
            Line::from(""),
            Line::from(format!("{} Loading artworks", spinner)),
        ];
        if let Some(error) = &state.last_error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from("Press r to retry"));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Artworks").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_rows(&self, frame: &mut Frame, area: Rect, state: &TableState) {
        let page_mark = if state.selection.all_selected(&state.records) {
            "[x]"
        } else if state.selection.count_on(&state.records) > 0 {
            "[-]"
        } else {
            "[ ]"
        };

        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(
            std::iter::once(Cell::from(format!("{}v", page_mark)))
                .chain(COLUMNS.iter().map(|c| Cell::from(*c))),
        )
        .style(header_style);

        let rows = state.records.iter().map(|record| {
            let selected = state.selection.contains(record.id);
            let mark = if selected { "[x]" } else { "[ ]" };
            let style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(
                std::iter::once(Cell::from(mark)).chain(record.cells().into_iter().map(Cell::from)),
            )
            .style(style)
        });

        let widths = [
            Constraint::Length(4),
            Constraint::Fill(3),
            Constraint::Fill(1),
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title("Artworks").borders(Borders::ALL))
            .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

        let selected = self.cursor.min(state.records.len() - 1);
        let mut cursor = RowCursor::default().with_selected(Some(selected));
        frame.render_stateful_widget(table, area, &mut cursor);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &TableState) {
        let rows = match state.page.row_range(state.records.len()) {
            Some((from, to)) => format!(
                "Rows {}-{} of {}",
                group_digits(from),
                group_digits(to),
                group_digits(state.page.total_count)
            ),
            None => "No rows".to_string(),
        };
        let pages = format!(
            "Page {}/{}",
            group_digits(state.page.page_index() as u64 + 1),
            group_digits(state.page.page_count().max(1))
        );

        let line = Line::from(vec![
            Span::raw(format!(" {} | ", rows)),
            Span::styled(pages, Style::default().fg(Color::Cyan)),
            Span::styled(
                "  [h/l] page  [space] select  [s] select first N",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}
