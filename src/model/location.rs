//! Geographic location types.

use serde::{Deserialize, Serialize};

/// A point on the map where a workout happened.
///
/// Immutable once attached to a workout: the record keeps the coordinates
/// of the original map click for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}
