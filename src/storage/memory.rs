//! In-memory store for tests and hosts without a filesystem.

use std::collections::HashMap;

use super::{KeyValueStore, Result};

/// A key-value store backed by a plain map. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        store.save("workouts", "[]").unwrap();
        assert_eq!(store.load("workouts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn load_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.load("workouts").unwrap().is_none());
    }
}
