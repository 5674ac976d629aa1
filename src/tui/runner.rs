//! TUI runner — terminal setup plus the synchronous main loop.
//!
//! Single-threaded: pool I/O runs inline on the event loop, each file
//! operation finishing before the next key is handled.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::app::RouletteApp;
use super::event::TuiMessage;
use super::layout;

/// Run the TUI main loop. Blocks until quit.
pub fn run_tui(mut app: RouletteApp) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    app.load();

    loop {
        terminal.draw(|f| layout::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Windows terminals deliver Release events too
                if key.kind == KeyEventKind::Press {
                    app.update(TuiMessage::Input(key));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
