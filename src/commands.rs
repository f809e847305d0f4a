//! Command pattern for key event handling.
//!
//! Keys are translated into [`AppCommand`]s by a pure function so the
//! bindings can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// App Commands
// ============================================================================

/// Semantic actions the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Leave the dashboard.
    Quit,
    /// Refetch every query now instead of waiting for the next poll.
    Refresh,
    /// No action to perform (unhandled key).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command would exit the application.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Map a key event to an application command.
#[must_use]
pub fn map_key(key: KeyEvent) -> AppCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppCommand::Quit,
            _ => AppCommand::Noop,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
        KeyCode::Char('r') => AppCommand::Refresh,
        _ => AppCommand::Noop,
    }
}
