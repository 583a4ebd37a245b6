//! File-backed store: one JSON file per key under a root directory.

use std::{fs, io, path::PathBuf};

use super::{KeyValueStore, Result};

/// Local file-based key-value store.
///
/// Each key maps to `<root>/<key>.json`. Keys are plain identifiers like
/// `"workouts"`, never paths.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
