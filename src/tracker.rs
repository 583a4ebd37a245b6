//! The workout tracker: owns the collection and drives the
//! click → form → workout → render/persist pipeline.
//!
//! The tracker is single-threaded and event-driven. The host delivers one
//! event at a time (map click, form submit, list click) and the tracker
//! finishes each synchronously, so the collection never needs locking.
//! Creation cycles through two states, carried by `pending`:
//!
//! - Idle (`pending == None`) — waiting for a map click.
//! - LocationPending (`pending == Some`) — a click captured a location and
//!   the form is open. A newer click overwrites the pending location; a
//!   successful submit consumes it.

use uuid::Uuid;

use crate::model::{InvalidInput, Location, Workout, WorkoutKind};
use crate::storage::{self, KeyValueStore};
use crate::views::{ListView, MapView, WorkoutForm};

/// A submission attempt that could not produce a workout.
///
/// Both variants are recoverable: the host surfaces the message to the
/// user and the tracker stays exactly where it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    /// Submit arrived before any map click.
    #[error("no location selected: click the map before submitting")]
    NoPendingLocation,

    /// A form field failed validation. The pending location and the form
    /// contents are retained so the user can correct and resubmit.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

/// Owns the workout collection and mediates between the host's events and
/// the model, views, and store.
pub struct Tracker<M, L, F, S> {
    map: M,
    list: L,
    form: F,
    store: S,
    workouts: Vec<Workout>,
    pending: Option<Location>,
}

impl<M, L, F, S> Tracker<M, L, F, S>
where
    M: MapView,
    L: ListView,
    F: WorkoutForm,
    S: KeyValueStore,
{
    pub fn new(map: M, list: L, form: F, store: S) -> Self {
        Self {
            map,
            list,
            form,
            store,
            workouts: Vec::new(),
            pending: None,
        }
    }

    /// Loads the persisted collection. Called once at startup.
    ///
    /// A missing key leaves the collection empty; so does a load failure
    /// or unreadable data, with a warning. Restored workouts are rendered
    /// into the list in stored order but get no markers — the host places
    /// those once its map has actually loaded, from [`Self::workouts`].
    pub fn restore(&mut self) {
        let raw = match self.store.load(storage::WORKOUTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                log::warn!("failed to load persisted workouts: {e}");
                return;
            }
        };

        let workouts = storage::decode(&raw);
        for workout in &workouts {
            self.list.render(workout);
        }
        self.workouts = workouts;
    }

    /// A click on the map: capture the location and open the form.
    ///
    /// The most recent click wins; an earlier not-yet-submitted location
    /// is silently superseded.
    pub fn handle_map_click(&mut self, location: Location) {
        self.pending = Some(location);
        self.form.show();
    }

    /// A form submit: validate, construct, render, persist.
    ///
    /// On error nothing changes — the collection, the pending location,
    /// and the form contents all stay as they were, so the user can fix
    /// the input and try again. On success the form is cleared and hidden
    /// and the tracker returns to idle.
    pub fn handle_submit(&mut self) -> Result<(), TrackerError> {
        let Some(location) = self.pending else {
            return Err(TrackerError::NoPendingLocation);
        };

        let fields = self.form.read();
        let workout = match fields.kind {
            WorkoutKind::Running => Workout::running(
                location,
                fields.distance_km,
                fields.duration_min,
                fields.cadence_spm,
            )?,
            WorkoutKind::Cycling => Workout::cycling(
                location,
                fields.distance_km,
                fields.duration_min,
                fields.elevation_gain_m,
            )?,
        };

        let label = format!("{} {}", workout.kind().icon(), workout.description);
        self.map.place_marker(workout.location, &label);
        self.list.render(&workout);
        self.workouts.push(workout);
        self.persist();

        self.form.clear();
        self.form.hide();
        self.pending = None;
        Ok(())
    }

    /// A click on a list entry: re-center the map on that workout.
    ///
    /// An id the collection doesn't know is ignored — a stale list entry
    /// must not crash the host.
    pub fn handle_list_click(&mut self, id: Uuid) {
        match self.workouts.iter().find(|w| w.id == id) {
            Some(workout) => self.map.center_on(workout.location),
            None => log::debug!("list click for unknown workout {id}"),
        }
    }

    /// The collection, in entry order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Rewrites the whole collection to the store.
    ///
    /// Best-effort: a failed save is logged and the session carries on
    /// with its in-memory state intact.
    fn persist(&mut self) {
        let result = storage::encode(&self.workouts)
            .and_then(|raw| self.store.save(storage::WORKOUTS_KEY, &raw));
        if let Err(e) = result {
            log::warn!("failed to persist workouts: {e}");
        }
    }
}
