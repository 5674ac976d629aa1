//! RouletteApp — the TEA model.
//!
//! All state lives here. Update receives TuiMessages and mutates state;
//! view reads state to produce widgets. No side effects in view. Errors
//! from the pool never escape the triggering action: each one becomes a
//! display message and the app stays usable.

use rand::rngs::StdRng;

use crate::catalog::SourceCatalog;
use crate::pool::error::PoolError;
use crate::pool::{LanguagePool, LoadOutcome};

use super::event::TuiMessage;

/// Tone of the display line, mapped to a color by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    /// Neutral guidance ("press 's' to spin").
    Info,
    /// A drawn language.
    Pick,
    /// Something went wrong with the last action.
    Error,
}

/// The main TUI application state (TEA model).
pub struct RouletteApp {
    /// The language pool, owned here for the lifetime of the window.
    pub pool: LanguagePool,
    /// The catalog used for resets.
    pub catalog: SourceCatalog,
    /// Random source for draws. Seeded from the CLI for reproducibility.
    pub rng: StdRng,
    /// Current display line.
    pub display: String,
    /// Tone of the display line.
    pub tone: MessageTone,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl RouletteApp {
    pub fn new(pool: LanguagePool, catalog: SourceCatalog, rng: StdRng) -> Self {
        Self {
            pool,
            catalog,
            rng,
            display: "Press 's' to spin!".into(),
            tone: MessageTone::Info,
            should_quit: false,
        }
    }

    /// Startup load. Best-effort, mirroring the pool's contract: a missing
    /// or empty file just prompts the user to reset.
    pub fn load(&mut self) {
        match self.pool.load() {
            Ok(LoadOutcome::Loaded(0)) => {
                self.notify("No languages left. Press 'r' to reset!");
            }
            Ok(LoadOutcome::Loaded(_)) => {}
            Ok(LoadOutcome::MissingFile) => {
                self.notify("Pool file missing. Press 'r' to reset!");
            }
            Err(e) => self.fail(format!("Error loading languages: {e}")),
        }
    }

    /// Draw a language and show it.
    pub fn spin(&mut self) {
        match self.pool.draw(&mut self.rng) {
            Ok(pick) => {
                self.display = pick;
                self.tone = MessageTone::Pick;
            }
            Err(PoolError::EmptyPool) => {
                self.notify("No languages left! Press 'r' to reset.");
            }
            Err(e) => self.fail(format!("Spin failed: {e}")),
        }
    }

    /// Rebuild the pool from the catalog.
    pub fn reset(&mut self) {
        match self.pool.reset(&self.catalog) {
            Ok(n) => self.notify(format!("Languages reset ({n}). Press 's' to spin!")),
            Err(e) => self.fail(format!("Reset failed: {e}")),
        }
    }

    /// Handle a TUI message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => super::input::handle_key(self, key),
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Records remaining in the pool.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.display = text.into();
        self.tone = MessageTone::Info;
    }

    fn fail(&mut self, text: impl Into<String>) {
        self.display = text.into();
        self.tone = MessageTone::Error;
    }
}
