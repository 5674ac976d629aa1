//! The roulette window — ratatui TUI presentation layer.
//!
//! ## Architecture (TEA)
//!
//! Model (`RouletteApp`) + Update (message handler) + View (render).
//! Immediate mode, no retained widget state. Strictly synchronous: draws
//! and resets run inline on the event loop, each file operation finishing
//! before the next event is read.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
