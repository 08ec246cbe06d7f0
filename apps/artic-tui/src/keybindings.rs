//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Toggle help
    ToggleHelp,
    /// Move cursor up in the table
    MoveUp,
    /// Move cursor down in the table
    MoveDown,
    /// Go to the next page
    NextPage,
    /// Go to the previous page
    PrevPage,
    /// Jump to the first page
    FirstPage,
    /// Jump to the last page
    LastPage,
    /// Re-request the current page
    Reload,
    /// Toggle the row under the cursor
    ToggleRow,
    /// Toggle every row on the page
    TogglePage,
    /// Deselect everything
    ClearSelection,
    /// Open the bulk select popover
    OpenBulkSelect,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
            Some(Action::NextPage)
        }
        KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
            Some(Action::PrevPage)
        }
        KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),
        KeyCode::Char('G') | KeyCode::End => Some(Action::LastPage),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleRow),
        KeyCode::Char('a') => Some(Action::TogglePage),
        KeyCode::Char('x') => Some(Action::ClearSelection),
        KeyCode::Char('s') => Some(Action::OpenBulkSelect),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_keys() {
        assert_eq!(normal_mode_action(KeyCode::Right), Some(Action::NextPage));
        assert_eq!(normal_mode_action(KeyCode::Char('p')), Some(Action::PrevPage));
        assert_eq!(normal_mode_action(KeyCode::Char('G')), Some(Action::LastPage));
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(normal_mode_action(KeyCode::Char(' ')), Some(Action::ToggleRow));
        assert_eq!(normal_mode_action(KeyCode::Char('s')), Some(Action::OpenBulkSelect));
        assert_eq!(normal_mode_action(KeyCode::Char('z')), None);
    }
}
