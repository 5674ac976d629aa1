//! Source catalog — the canonical CSV the pool is rebuilt from.
//!
//! Read-only. One `category,name,description` record per line, with an
//! optional header as the first line.

use std::fs;
use std::path::{Path, PathBuf};

/// Header line written by the catalog export, discarded on read.
pub const HEADER: &str = "Category,Language,Description";

/// Read-only view over the catalog file.
pub struct SourceCatalog {
    path: PathBuf,
}

impl SourceCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// All data lines in file order, whitespace-trimmed, with the header
    /// dropped if present.
    pub fn entries(&self) -> std::io::Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)?;
        let mut lines: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
        if lines.first().map(String::as_str) == Some(HEADER) {
            lines.remove(0);
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog_with(dir: &TempDir, content: &str) -> SourceCatalog {
        let path = dir.path().join("source.csv");
        fs::write(&path, content).unwrap();
        SourceCatalog::new(path)
    }

    #[test]
    fn header_is_dropped() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_with(
            &dir,
            "Category,Language,Description\nSystems,Rust,Safe\n",
        );
        assert_eq!(catalog.entries().unwrap(), vec!["Systems,Rust,Safe"]);
    }

    #[test]
    fn no_header_keeps_first_line() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_with(&dir, "Systems,Rust,Safe\nScripting,Python,Dynamic\n");
        assert_eq!(catalog.entries().unwrap().len(), 2);
    }

    #[test]
    fn lines_are_trimmed() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_with(&dir, "  Systems,Rust,Safe  \n");
        assert_eq!(catalog.entries().unwrap(), vec!["Systems,Rust,Safe"]);
    }

    #[test]
    fn missing_file_reported_by_exists() {
        let dir = TempDir::new().unwrap();
        let catalog = SourceCatalog::new(dir.path().join("absent.csv"));
        assert!(!catalog.exists());
        assert!(catalog.entries().is_err());
    }

    #[test]
    fn empty_file_yields_no_entries() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_with(&dir, "");
        assert!(catalog.entries().unwrap().is_empty());
    }
}
