//! Key binding dispatch for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::RouletteApp;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut RouletteApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('s') | KeyCode::Enter => app.spin(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
