//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use artic_core::{update, Effect, Msg, TableState};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{BulkPopoverView, HelpView, TableView};
use crate::widgets::StatusBar;

/// Main application state
pub struct App {
    /// Current mode (NORMAL, INSERT, COMMAND)
    pub mode: Mode,
    /// Table state, only changed through `dispatch`
    pub state: TableState,
    /// Row cursor
    pub table_view: TableView,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Frame counter for the loading spinner
    tick: usize,
    /// Fetches waiting to be spawned
    outbox: Vec<Effect>,
}

impl App {
    /// Create a new application instance
    pub fn new(page_size: u32) -> Self {
        Self {
            mode: Mode::Normal,
            state: TableState::new(page_size),
            table_view: TableView::new(),
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            tick: 0,
            outbox: Vec::new(),
        }
    }

    /// Request the first page
    pub fn start(&mut self) {
        self.dispatch(Msg::ChangePage { page_index: 0 });
    }

    /// Run a message through the update function
    pub fn dispatch(&mut self, msg: Msg) {
        let page_before = self.state.page.first;
        let page_size = self.state.page.page_size;

        let state = std::mem::replace(&mut self.state, TableState::new(page_size));
        let (state, effects) = update(state, msg);
        self.state = state;
        self.outbox.extend(effects);

        if self.state.page.first != page_before {
            self.table_view.cursor = 0;
        }
        self.table_view.clamp(self.state.records.len());

        if self.state.popover.open {
            self.mode = Mode::Insert;
        } else if self.mode == Mode::Insert {
            self.mode = Mode::Normal;
        }
    }

    /// Fetches requested since the last call
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outbox)
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Status bar at top, table in the middle, command line at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        StatusBar::new(self.mode, &self.state).render(frame, chunks[0]);
        self.table_view
            .render(frame, chunks[1], &self.state, self.tick);
        self.render_command_line(frame, chunks[2]);

        if self.state.popover.open {
            BulkPopoverView::render(frame, chunks[1], &self.state.popover);
        }

        if self.show_help {
            HelpView::render(frame, size);
        }
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let content = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            _ => self
                .status_message
                .clone()
                .unwrap_or_else(|| "Press ? for help | : for commands".to_string()),
        };

        frame.render_widget(Paragraph::new(content), area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return true;
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Insert => self.handle_insert_key(code),
            Mode::Command => self.handle_command_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::MoveDown => self.table_view.next_row(self.state.records.len()),
            Action::MoveUp => self.table_view.prev_row(self.state.records.len()),
            Action::NextPage => self.dispatch(Msg::NextPage),
            Action::PrevPage => self.dispatch(Msg::PrevPage),
            Action::FirstPage => self.dispatch(Msg::FirstPage),
            Action::LastPage => self.dispatch(Msg::LastPage),
            Action::Reload => self.dispatch(Msg::Reload),
            Action::ToggleRow => {
                if let Some(record) = self.state.records.get(self.table_view.cursor) {
                    let id = record.id;
                    self.dispatch(Msg::ToggleRow { id });
                }
            }
            Action::TogglePage => self.dispatch(Msg::TogglePage),
            Action::ClearSelection => {
                self.dispatch(Msg::ClearSelection);
                self.status_message = Some("Selection cleared".to_string());
            }
            Action::OpenBulkSelect => self.dispatch(Msg::ToggleBulk),
        }
        false
    }

    fn handle_insert_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => self.dispatch(Msg::CloseBulk),
            KeyCode::Enter => self.dispatch(Msg::ApplyBulk),
            KeyCode::Backspace => {
                let mut input = self.state.popover.input.clone();
                input.pop();
                self.dispatch(Msg::EditBulkInput(input));
            }
            KeyCode::Char(c) => {
                let mut input = self.state.popover.input.clone();
                input.push(c);
                self.dispatch(Msg::EditBulkInput(input));
            }
            _ => {}
        }
        false
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command();
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    fn execute_command(&mut self) -> bool {
        let parts: Vec<&str> = self.command_buffer.split_whitespace().collect();
        if parts.is_empty() {
            return false;
        }

        match parts[0] {
            "q" | "quit" => {
                return true;
            }
            "page" => match parts.get(1).and_then(|p| p.parse::<u32>().ok()) {
                Some(page) if page >= 1 => {
                    self.dispatch(Msg::ChangePage {
                        page_index: page - 1,
                    });
                    self.status_message = Some(format!("Page {}", page));
                }
                _ => {
                    self.status_message = Some("Usage: :page <n>".to_string());
                }
            },
            "select" => {
                if let Some(count) = parts.get(1) {
                    self.dispatch(Msg::EditBulkInput(count.to_string()));
                    self.dispatch(Msg::ApplyBulk);
                } else {
                    self.status_message = Some("Usage: :select <n>".to_string());
                }
            }
            "clear" => {
                self.dispatch(Msg::ClearSelection);
                self.status_message = Some("Selection cleared".to_string());
            }
            "reload" => self.dispatch(Msg::Reload),
            _ => {
                self.status_message = Some(format!("Unknown command: {}", parts[0]));
            }
        }
        false
    }
}
