//! Menu actions and rendering.
//!
//! # Responsibility
//! - Map the numeric menu selection onto session actions.
//! - Render the fixed four-entry menu block and selection prompt.

use std::io::{self, Write};

/// Actions reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddTodo,
    DeleteTodo,
    ShowTodos,
    ExitApp,
}

impl MenuAction {
    /// Maps a numeric selection onto an action.
    ///
    /// Returns `None` for anything outside `1..=4`.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Self::AddTodo),
            2 => Some(Self::DeleteTodo),
            3 => Some(Self::ShowTodos),
            4 => Some(Self::ExitApp),
            _ => None,
        }
    }
}

/// Writes the menu block and the selection prompt.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available actions for todo app")?;
    writeln!(out, "1. Add Todo")?;
    writeln!(out, "2. Delete Todo")?;
    writeln!(out, "3. Show Todos")?;
    writeln!(out, "4. Exit app")?;
    write!(out, "Enter menu option : ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::MenuAction;

    #[test]
    fn from_selection_covers_the_valid_range() {
        assert_eq!(MenuAction::from_selection(1), Some(MenuAction::AddTodo));
        assert_eq!(MenuAction::from_selection(2), Some(MenuAction::DeleteTodo));
        assert_eq!(MenuAction::from_selection(3), Some(MenuAction::ShowTodos));
        assert_eq!(MenuAction::from_selection(4), Some(MenuAction::ExitApp));
    }

    #[test]
    fn from_selection_rejects_out_of_range_values() {
        assert_eq!(MenuAction::from_selection(0), None);
        assert_eq!(MenuAction::from_selection(5), None);
        assert_eq!(MenuAction::from_selection(-1), None);
    }
}
