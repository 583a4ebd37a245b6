//! Host configuration.
//!
//! Loaded from `~/.waymark/config.toml`. The component must run without
//! any configuration at all, so a missing file just yields defaults; only
//! a file that exists but cannot be parsed is an error.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Waymark configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Where the file or `SQLite` store keeps its data.
    /// Defaults to `~/.waymark` when unset.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.waymark/config.toml`, defaults if missing.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, defaults if it doesn't exist.
    pub fn load_from(path: &std::path::Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.waymark/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waymark").join("config.toml"))
    }

    /// The resolved data directory for the bundled storage backends.
    pub fn data_dir(&self) -> Option<PathBuf> {
        match &self.data_dir {
            Some(dir) => Some(dir.clone()),
            None => dirs::home_dir().map(|h| h.join(".waymark")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.data_dir.is_none());
    }

    #[test]
    fn data_dir_is_read_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data-dir = \"/tmp/waymark-data\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(
            config.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/waymark-data"))
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data-dir = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
