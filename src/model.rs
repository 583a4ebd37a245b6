//! Core data model for waymark.
//!
//! Workouts are constructed exactly once from validated input; everything
//! derived from that input (pace, speed, description) is stored on the
//! record and trusted verbatim when it comes back from persistence.

mod location;
mod workout;

pub use location::Location;
pub use workout::{InvalidInput, Metrics, Workout, WorkoutKind};
