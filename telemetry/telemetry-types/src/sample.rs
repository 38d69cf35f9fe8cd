//! Telemetry sample records.

use hashbrown::HashMap;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Named scalar process channels attached to a sample.
///
/// Keys are column names from the process log (`"temperature"`,
/// `"spindle_torque"`, ...). Values may be NaN when the logger dropped a
/// reading; the color mapper fills those by carry-forward.
pub type ScalarMap = HashMap<String, f64>;

/// One process telemetry record.
///
/// Produced by an ingestion frontend and validated in bulk by
/// [`crate::ProcessPath::try_new`]. Immutable once the path is built.
///
/// # Units
///
/// - `position`: millimeters
/// - `feed_velocity`: feedstock advance rate, mm/s
/// - `path_velocity`: tool travel rate along the path, mm/s
///
/// # Example
///
/// ```
/// use telemetry_types::{Sample, Timestamp};
/// use nalgebra::Point3;
///
/// let sample = Sample::new(
///     Timestamp::from_secs_f64(0.5),
///     Point3::new(10.0, 0.0, 3.0),
///     50.0,
///     25.0,
/// )
/// .with_scalar("temperature", 412.0);
///
/// assert_eq!(sample.scalar("temperature"), Some(412.0));
/// assert_eq!(sample.scalar("torque"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Sample time.
    pub timestamp: Timestamp,

    /// Tool position in millimeters.
    pub position: Point3<f64>,

    /// Feedstock advance rate in mm/s.
    pub feed_velocity: f64,

    /// Tool travel rate along the path in mm/s.
    pub path_velocity: f64,

    /// Named scalar process channels (temperature, torque, ...).
    pub scalars: ScalarMap,
}

impl Sample {
    /// Creates a sample with no scalar channels.
    #[must_use]
    pub fn new(
        timestamp: Timestamp,
        position: Point3<f64>,
        feed_velocity: f64,
        path_velocity: f64,
    ) -> Self {
        Self {
            timestamp,
            position,
            feed_velocity,
            path_velocity,
            scalars: ScalarMap::new(),
        }
    }

    /// Attaches a scalar channel value, replacing any existing value.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>, value: f64) -> Self {
        self.scalars.insert(name.into(), value);
        self
    }

    /// Looks up a scalar channel by name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.scalars.get(name).copied()
    }

    /// Checks that position and velocity fields are finite.
    ///
    /// Scalar channels are exempt: a NaN scalar is a dropped reading, not
    /// a malformed sample, and is recovered by carry-forward downstream.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
            && self.feed_velocity.is_finite()
            && self.path_velocity.is_finite()
    }
}
