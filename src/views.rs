//! Collaborator seams between the tracker and its hosting environment.
//!
//! The core never touches a map widget, a DOM node, or a storage backend
//! directly. The host implements these traits and wires its own events
//! (map clicks, form submits, list clicks) to the tracker's `handle_*`
//! methods; the tracker talks back only through these calls.

use crate::model::{Location, Workout, WorkoutKind};

/// The interactive map: markers and viewport control.
pub trait MapView {
    /// Re-center the viewport on a location.
    fn center_on(&mut self, location: Location);

    /// Place a marker at a location with a popup label
    /// (e.g. "🏃‍♂️ Running on April 14").
    fn place_marker(&mut self, location: Location, label: &str);
}

/// The workout summary list.
pub trait ListView {
    /// Render one workout as a list entry, keyed by its id.
    fn render(&mut self, workout: &Workout);
}

/// The entry form.
///
/// `read` returns whatever the user typed, unvalidated; validation belongs
/// to workout construction, not the form.
pub trait WorkoutForm {
    fn read(&self) -> FormSnapshot;
    fn clear(&mut self);
    fn show(&mut self);
    fn hide(&mut self);
}

/// A raw read of the entry form.
///
/// Every numeric field is present regardless of kind; the tracker picks
/// the one the selected kind needs. Hosts report an empty or non-numeric
/// field as NaN, which fails validation downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSnapshot {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub cadence_spm: f64,
    pub elevation_gain_m: f64,
}
