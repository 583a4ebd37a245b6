//! Waymark: a workout log pinned to a map.
//!
//! The host environment owns the actual map widget, the entry form, the
//! summary list, and the event loop; this crate owns everything between
//! them — the typed workout records, the creation state machine, and
//! keeping the in-memory collection in sync with persisted state.
//!
//! A session looks like:
//!
//! 1. [`Tracker::restore`] loads the persisted collection and renders it.
//! 2. A map click captures a pending location and opens the form.
//! 3. A form submit validates the fields, builds a [`model::Workout`]
//!    with its derived metrics, places a marker, renders a list entry,
//!    and rewrites the collection to the store.
//! 4. A list click re-centers the map on the matching workout.
//!
//! The host implements the [`views`] traits and a [`storage::KeyValueStore`]
//! (or uses a bundled backend) and forwards its events to the tracker.

pub mod config;
pub mod model;
pub mod storage;
pub mod tracker;
pub mod views;

pub use config::Config;
pub use model::{InvalidInput, Location, Metrics, Workout, WorkoutKind};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SqliteStore, StorageError};
pub use tracker::{Tracker, TrackerError};
pub use views::{FormSnapshot, ListView, MapView, WorkoutForm};
