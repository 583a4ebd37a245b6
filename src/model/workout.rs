//! Workout records: validated at construction, immutable afterwards.
//!
//! A workout is built exactly once, from a map location plus the raw form
//! fields. Derived values (pace, speed, description) are computed here and
//! stored on the record; they are never recomputed or patched later, not
//! even when a record comes back from storage.

use jiff::{Timestamp, tz::TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Location;

/// A form field failed validation: not a finite number, or out of range.
///
/// Recovered locally by the caller (the user is warned and the form stays
/// open); nothing is constructed or appended when this is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} must be {constraint}, got {value}")]
pub struct InvalidInput {
    /// Which form field was rejected.
    pub field: &'static str,
    /// The raw value as read from the form.
    pub value: f64,
    /// "a positive number" or "a non-negative number".
    pub constraint: &'static str,
}

/// The two workout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized name, used as the first word of a description.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    /// Emoji shown in marker popups and list entries.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Running => "🏃‍♂️",
            Self::Cycling => "🚴‍♀️",
        }
    }
}

/// A single recorded exercise session.
///
/// `id` is the sole correlation key between a list entry, a map marker, and
/// a persisted record. The serde layout is the storage layout: camelCase
/// fields with the variant payload flattened in, so a running record reads
/// `{id, createdAt, location, distanceKm, durationMin, description,
/// kind: "running", cadenceSpm, paceMinPerKm}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub location: Location,
    pub distance_km: f64,
    pub duration_min: f64,
    pub description: String,
    #[serde(flatten)]
    pub metrics: Metrics,
}

/// Variant-specific input and its derived metric, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Metrics {
    Running {
        cadence_spm: u32,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl Workout {
    /// Builds a running workout.
    ///
    /// All three numbers must be finite and strictly positive. Pace is
    /// `duration / distance` in min/km.
    pub fn running(
        location: Location,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self, InvalidInput> {
        let distance_km = require_positive("distance", distance_km)?;
        let duration_min = require_positive("duration", duration_min)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cadence_spm = require_positive("cadence", cadence_spm)? as u32;

        Ok(Self::assemble(
            WorkoutKind::Running,
            location,
            distance_km,
            duration_min,
            Metrics::Running {
                cadence_spm,
                pace_min_per_km: duration_min / distance_km,
            },
        ))
    }

    /// Builds a cycling workout.
    ///
    /// Distance and duration must be finite and strictly positive;
    /// elevation gain may be zero (a flat ride is a valid ride).
    /// Speed is `distance / (duration / 60)` in km/h.
    pub fn cycling(
        location: Location,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self, InvalidInput> {
        let distance_km = require_positive("distance", distance_km)?;
        let duration_min = require_positive("duration", duration_min)?;
        let elevation_gain_m = require_non_negative("elevation gain", elevation_gain_m)?;

        Ok(Self::assemble(
            WorkoutKind::Cycling,
            location,
            distance_km,
            duration_min,
            Metrics::Cycling {
                elevation_gain_m,
                speed_km_per_h: distance_km / (duration_min / 60.0),
            },
        ))
    }

    fn assemble(
        kind: WorkoutKind,
        location: Location,
        distance_km: f64,
        duration_min: f64,
        metrics: Metrics,
    ) -> Self {
        let created_at = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            created_at,
            location,
            distance_km,
            duration_min,
            description: describe(kind, created_at),
            metrics,
        }
    }

    /// The variant discriminator.
    pub fn kind(&self) -> WorkoutKind {
        match self.metrics {
            Metrics::Running { .. } => WorkoutKind::Running,
            Metrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Human-readable label: "Running on April 14".
///
/// Month and day are taken from the timestamp in UTC; an embedded
/// component has no ambient time zone to borrow.
fn describe(kind: WorkoutKind, created_at: Timestamp) -> String {
    let date = created_at.to_zoned(TimeZone::UTC).date();
    let month = MONTHS[(date.month() - 1) as usize];
    format!("{} on {} {}", kind.label(), month, date.day())
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInput {
            field,
            value,
            constraint: "a positive number",
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidInput {
            field,
            value,
            constraint: "a non-negative number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> Location {
        Location {
            latitude: 51.5,
            longitude: -0.1,
        }
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        let w = Workout::running(loc(), 5.0, 25.0, 180.0).unwrap();
        assert_eq!(w.kind(), WorkoutKind::Running);
        match w.metrics {
            Metrics::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                assert_eq!(cadence_spm, 180);
                assert_eq!(pace_min_per_km, 5.0);
            }
            Metrics::Cycling { .. } => panic!("expected running metrics"),
        }
    }

    #[test]
    fn cycling_speed_is_distance_over_hours() {
        let w = Workout::cycling(loc(), 30.0, 90.0, 420.0).unwrap();
        match w.metrics {
            Metrics::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                assert_eq!(elevation_gain_m, 420.0);
                assert_eq!(speed_km_per_h, 20.0);
            }
            Metrics::Running { .. } => panic!("expected cycling metrics"),
        }
    }

    #[test]
    fn negative_distance_rejected() {
        let err = Workout::running(loc(), -5.0, 30.0, 10.0).unwrap_err();
        assert_eq!(err.field, "distance");
    }

    #[test]
    fn zero_duration_rejected() {
        let err = Workout::cycling(loc(), 10.0, 0.0, 50.0).unwrap_err();
        assert_eq!(err.field, "duration");
    }

    #[test]
    fn non_numeric_cadence_rejected() {
        // An empty or non-numeric form field reads back as NaN.
        let err = Workout::running(loc(), 5.0, 25.0, f64::NAN).unwrap_err();
        assert_eq!(err.field, "cadence");
    }

    #[test]
    fn zero_elevation_gain_accepted() {
        let w = Workout::cycling(loc(), 10.0, 30.0, 0.0).unwrap();
        assert!(matches!(
            w.metrics,
            Metrics::Cycling {
                elevation_gain_m, ..
            } if elevation_gain_m == 0.0
        ));
    }

    #[test]
    fn negative_elevation_gain_rejected() {
        let err = Workout::cycling(loc(), 10.0, 30.0, -1.0).unwrap_err();
        assert_eq!(err.field, "elevation gain");
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let ids: Vec<Uuid> = (0..100)
            .map(|_| Workout::running(loc(), 5.0, 25.0, 180.0).unwrap().id)
            .collect();
        for (i, a) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(a));
        }
    }

    #[test]
    fn description_reads_kind_on_month_day() {
        let at: Timestamp = "2024-04-14T09:30:00Z".parse().unwrap();
        assert_eq!(describe(WorkoutKind::Running, at), "Running on April 14");
        assert_eq!(describe(WorkoutKind::Cycling, at), "Cycling on April 14");
    }

    #[test]
    fn serde_layout_matches_storage_contract() {
        let w = Workout::running(loc(), 5.0, 25.0, 180.0).unwrap();
        let value: serde_json::Value = serde_json::to_value(&w).unwrap();

        assert_eq!(value["kind"], "running");
        assert_eq!(value["distanceKm"], 5.0);
        assert_eq!(value["durationMin"], 25.0);
        assert_eq!(value["cadenceSpm"], 180);
        assert_eq!(value["paceMinPerKm"], 5.0);
        assert_eq!(value["location"]["latitude"], 51.5);
        assert!(value["createdAt"].is_string());

        let back: Workout = serde_json::from_value(value).unwrap();
        assert_eq!(back, w);
    }
}
