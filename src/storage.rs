//! Persistence for the workout log.
//!
//! The tracker sees one narrow seam: a [`KeyValueStore`] holding a single
//! serialized document under the `"workouts"` key. Three backends ship with
//! the crate — a JSON file per key, a single-file `SQLite` table, and an
//! in-memory map — but a host is free to bring its own (browser local
//! storage, a remote blob, whatever fits).
//!
//! The document written since schema 1:
//!
//! ```json
//! { "schema": 1, "workouts": [ { "id": "...", "kind": "running", ... } ] }
//! ```
//!
//! Decoding also accepts the bare array older installs wrote.

mod file;
mod memory;
mod sqlite;

use std::io;

use serde::{Deserialize, Serialize};

use crate::model::Workout;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// The key the whole workout collection is stored under.
pub const WORKOUTS_KEY: &str = "workouts";

const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Minimal key-value persistence.
///
/// `save` rewrites the full value for a key; there is no incremental
/// update. `load` returns `None` for a key that was never saved.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Serialize, Deserialize)]
struct PersistedLog {
    schema: u32,
    workouts: Vec<serde_json::Value>,
}

/// Serializes the collection as a versioned document.
pub fn encode(workouts: &[Workout]) -> Result<String> {
    let entries = workouts
        .iter()
        .map(serde_json::to_value)
        .collect::<core::result::Result<Vec<_>, _>>()?;
    Ok(serde_json::to_string(&PersistedLog {
        schema: SCHEMA_VERSION,
        workouts: entries,
    })?)
}

/// Deserializes a persisted document back into a collection.
///
/// Never fails: corrupt persisted state is recovered by dropping what
/// cannot be read. A document that is not valid JSON, not a recognized
/// shape, or carries a schema newer than this crate yields an empty
/// collection; an individual malformed entry is dropped while the rest
/// of the log survives. Every drop is logged as a warning.
pub fn decode(raw: &str) -> Vec<Workout> {
    let entries = match serde_json::from_str::<serde_json::Value>(raw) {
        // Versioned document.
        Ok(value @ serde_json::Value::Object(_)) => match serde_json::from_value::<PersistedLog>(value) {
            Ok(log) if log.schema <= SCHEMA_VERSION => log.workouts,
            Ok(log) => {
                log::warn!(
                    "persisted workout log has unknown schema {}, starting empty",
                    log.schema
                );
                return Vec::new();
            }
            Err(e) => {
                log::warn!("persisted workout log is malformed, starting empty: {e}");
                return Vec::new();
            }
        },
        // Bare array written before the schema field existed.
        Ok(serde_json::Value::Array(entries)) => entries,
        Ok(_) => {
            log::warn!("persisted workout log is not an object or array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("persisted workout log is not valid JSON, starting empty: {e}");
            return Vec::new();
        }
    };

    let mut workouts = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Workout>(entry) {
            Ok(w) => workouts.push(w),
            Err(e) => log::warn!("dropping malformed persisted workout: {e}"),
        }
    }
    workouts
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Location, Workout};

    fn loc() -> Location {
        Location {
            latitude: 51.5,
            longitude: -0.1,
        }
    }

    fn sample_log() -> Vec<Workout> {
        vec![
            Workout::running(loc(), 5.0, 25.0, 180.0).unwrap(),
            Workout::cycling(loc(), 30.0, 90.0, 420.0).unwrap(),
        ]
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let log = sample_log();
        let decoded = decode(&encode(&log).unwrap());
        assert_eq!(decoded, log);
    }

    #[test]
    fn decode_accepts_legacy_bare_array() {
        let log = sample_log();
        let raw = serde_json::to_string(&log).unwrap();
        assert_eq!(decode(&raw), log);
    }

    #[test]
    fn decode_invalid_json_yields_empty() {
        assert!(decode("not json {").is_empty());
    }

    #[test]
    fn decode_unknown_schema_yields_empty() {
        let raw = r#"{"schema": 99, "workouts": []}"#;
        assert!(decode(raw).is_empty());
    }

    #[test]
    fn decode_drops_malformed_entry_keeps_rest() {
        let log = sample_log();
        let mut raw: serde_json::Value =
            serde_json::from_str(&encode(&log).unwrap()).unwrap();
        raw["workouts"]
            .as_array_mut()
            .unwrap()
            .insert(1, serde_json::json!({"id": "not-a-uuid"}));

        let decoded = decode(&raw.to_string());
        assert_eq!(decoded, log);
    }
}
