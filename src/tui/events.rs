//! Custom event types for the picker TUI.

use crossterm::event::KeyEvent;

/// Events that can occur in the picker application
#[derive(Debug)]
pub enum TuiEvent {
    /// User keyboard input
    Key(KeyEvent),
    /// Execute the marked algorithm
    Execute(String),
    /// Rescan the scripts directory
    Refresh,
}
