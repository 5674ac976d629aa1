//! Language Roulette — a file-backed roulette wheel of programming languages.
//!
//! The pool of not-yet-drawn languages lives in a plain text file. Drawing
//! removes a random entry and persists the shrunk pool; resetting rebuilds
//! the pool from the source catalog CSV.

pub mod catalog;
pub mod config;
pub mod pool;
pub mod tui;
