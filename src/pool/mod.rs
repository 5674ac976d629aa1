//! The language pool — draw-and-remove over a file-backed list.
//!
//! The pool holds raw record lines in file order, fully in memory. Every
//! mutating operation (draw, reset) writes the file before returning, so
//! memory and disk agree after any successful call. Lines are opaque at
//! load time; they are only interpreted when drawn.

pub mod error;
pub mod record;

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{info, warn};

use crate::catalog::SourceCatalog;
use self::error::{PoolError, PoolResult};

/// What `load` found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Backing file read; the pool holds its lines.
    Loaded(usize),
    /// Backing file absent; the pool is empty until the first reset.
    MissingFile,
}

/// Uniform random index into a sequence of `len` elements.
///
/// Kept separate from `draw` so a seeded rng gives deterministic selection.
/// `len` must be non-zero.
pub fn pick_index(len: usize, rng: &mut impl Rng) -> usize {
    rng.gen_range(0..len)
}

/// The ordered working set of not-yet-drawn language records.
pub struct LanguagePool {
    /// Raw record lines, in file order.
    records: Vec<String>,
    /// Backing file path.
    path: PathBuf,
}

impl LanguagePool {
    /// Create an empty pool backed by `path`. Call `load` to populate it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            path: path.into(),
        }
    }

    /// Reload the pool from the backing file, trimming line terminators.
    ///
    /// A missing file is not an error: the pool is simply empty until the
    /// first reset. Any other read failure also leaves the pool empty.
    pub fn load(&mut self) -> PoolResult<LoadOutcome> {
        self.records.clear();
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "pool file missing, starting empty");
                return Ok(LoadOutcome::MissingFile);
            }
            Err(e) => return Err(PoolError::Io(e)),
        };
        for line in BufReader::new(file).lines() {
            match line {
                Ok(l) => self.records.push(l),
                Err(e) => {
                    self.records.clear();
                    return Err(PoolError::Io(e));
                }
            }
        }
        info!(count = self.records.len(), "pool loaded");
        Ok(LoadOutcome::Loaded(self.records.len()))
    }

    /// Draw one record at random, remove it, persist the shrunk pool, and
    /// return its presentation string.
    ///
    /// Removal is by first textual match: with duplicate lines this may
    /// remove a different copy than the one selected. That mirrors the
    /// original removal-by-value semantics and is accepted.
    ///
    /// On persist failure the in-memory pool has already shrunk; memory and
    /// disk diverge until the next successful write.
    pub fn draw(&mut self, rng: &mut impl Rng) -> PoolResult<String> {
        if self.records.is_empty() {
            return Err(PoolError::EmptyPool);
        }
        let idx = pick_index(self.records.len(), rng);
        let selected = self.records[idx].clone();
        if let Some(pos) = self.records.iter().position(|r| r == &selected) {
            self.records.remove(pos);
        }
        self.persist()?;
        info!(remaining = self.records.len(), "language drawn");
        Ok(record::present(&selected))
    }

    /// Rebuild the pool from the source catalog, discarding prior draws.
    ///
    /// Each catalog data line is written to the backing file prefixed with a
    /// fresh 1-based index and a single space, in source order; the pool is
    /// then reloaded from disk. If the catalog file does not exist the pool
    /// is left untouched. Returns the new pool size.
    pub fn reset(&mut self, catalog: &SourceCatalog) -> PoolResult<usize> {
        if !catalog.exists() {
            return Err(PoolError::SourceMissing(catalog.path().to_path_buf()));
        }
        let entries = catalog.entries()?;
        let mut out = String::new();
        for (i, line) in entries.iter().enumerate() {
            out.push_str(&format!("{} {line}\n", i + 1));
        }
        fs::write(&self.path, out).map_err(PoolError::Persist)?;
        self.load()?;
        info!(count = self.records.len(), "pool reset from catalog");
        Ok(self.records.len())
    }

    /// Write the in-memory pool to the backing file, one record per line,
    /// overwriting prior contents.
    ///
    /// On failure the in-memory pool is left as-is and the error surfaces to
    /// the caller; nothing is rolled back.
    pub fn persist(&self) -> PoolResult<()> {
        let mut out = String::new();
        for r in &self.records {
            out.push_str(r);
            out.push('\n');
        }
        fs::write(&self.path, out).map_err(PoolError::Persist)
    }

    /// Number of records remaining.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the pool has nothing left to draw.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The raw record lines, in order.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
