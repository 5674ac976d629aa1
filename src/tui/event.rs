//! TUI messages — everything the update loop reacts to.

use crossterm::event::KeyEvent;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Quit the TUI.
    Quit,
}
