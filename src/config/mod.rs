//! Runtime configuration — where the pool file and source catalog live.
//!
//! Optional `roulette.yaml` beside the data files. CLI flags override
//! whatever is configured; a missing or malformed file falls back to
//! defaults, since the config is a convenience rather than a requirement.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default backing file for the pool.
pub const DEFAULT_DICT: &str = "dict.txt";
/// Default source catalog CSV.
pub const DEFAULT_SOURCE: &str = "programming_languages_cleaned.csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouletteConfig {
    /// Pool backing file (one numbered record per line).
    #[serde(default = "default_dict")]
    pub dict_path: PathBuf,
    /// Source catalog CSV.
    #[serde(default = "default_source")]
    pub source_path: PathBuf,
}

fn default_dict() -> PathBuf {
    DEFAULT_DICT.into()
}

fn default_source() -> PathBuf {
    DEFAULT_SOURCE.into()
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            dict_path: default_dict(),
            source_path: default_source(),
        }
    }
}

impl RouletteConfig {
    /// Load config from a YAML file, falling back to defaults when the file
    /// is missing or unparseable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roulette.yaml");
        std::fs::write(
            &path,
            "dict_path: data/pool.txt\nsource_path: data/languages.csv\n",
        )
        .unwrap();
        let config = RouletteConfig::load(&path);
        assert_eq!(config.dict_path, PathBuf::from("data/pool.txt"));
        assert_eq!(config.source_path, PathBuf::from("data/languages.csv"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RouletteConfig::load(&dir.path().join("absent.yaml"));
        assert_eq!(config, RouletteConfig::default());
    }

    #[test]
    fn malformed_yaml_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roulette.yaml");
        std::fs::write(&path, "dict_path: [not a\n").unwrap();
        assert_eq!(RouletteConfig::load(&path), RouletteConfig::default());
    }

    #[test]
    fn partial_yaml_uses_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roulette.yaml");
        std::fs::write(&path, "dict_path: elsewhere.txt\n").unwrap();
        let config = RouletteConfig::load(&path);
        assert_eq!(config.dict_path, PathBuf::from("elsewhere.txt"));
        assert_eq!(config.source_path, PathBuf::from(DEFAULT_SOURCE));
    }

    #[test]
    fn defaults() {
        let config = RouletteConfig::default();
        assert_eq!(config.dict_path, PathBuf::from(DEFAULT_DICT));
        assert_eq!(config.source_path, PathBuf::from(DEFAULT_SOURCE));
    }
}
