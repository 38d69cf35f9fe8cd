//! Validated process paths.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PathError, PathResult};
use crate::Sample;

/// An ordered, validated batch of telemetry samples for one deposition pass.
///
/// Construction through [`ProcessPath::try_new`] enforces the input
/// contract once; downstream consumers never re-validate:
///
/// - at least two samples (one sample cannot be swept into a solid)
/// - finite position and velocity fields on every sample
/// - non-decreasing timestamps
///
/// # Example
///
/// ```
/// use telemetry_types::{ProcessPath, Sample, Timestamp};
/// use nalgebra::Point3;
///
/// let samples: Vec<Sample> = (0..4)
///     .map(|i| {
///         Sample::new(
///             Timestamp::from_secs_f64(f64::from(i) * 0.1),
///             Point3::new(f64::from(i), 0.0, 0.0),
///             50.0,
///             25.0,
///         )
///     })
///     .collect();
///
/// let path = ProcessPath::try_new(samples).unwrap();
/// assert_eq!(path.len(), 4);
/// assert!((path.total_length() - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessPath {
    samples: Vec<Sample>,
}

impl ProcessPath {
    /// Minimum number of samples in a path.
    pub const MIN_SAMPLES: usize = 2;

    /// Validates a sample batch into a path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - fewer than [`Self::MIN_SAMPLES`] samples are provided
    /// - any position or velocity field is NaN or infinite
    /// - any timestamp precedes the one before it
    pub fn try_new(samples: Vec<Sample>) -> PathResult<Self> {
        if samples.len() < Self::MIN_SAMPLES {
            return Err(PathError::TooFewSamples {
                required: Self::MIN_SAMPLES,
                actual: samples.len(),
            });
        }

        for (index, sample) in samples.iter().enumerate() {
            if !sample.position.coords.iter().all(|c| c.is_finite()) {
                return Err(PathError::NonFiniteField {
                    index,
                    field: "position",
                });
            }
            if !sample.feed_velocity.is_finite() {
                return Err(PathError::NonFiniteField {
                    index,
                    field: "feed_velocity",
                });
            }
            if !sample.path_velocity.is_finite() {
                return Err(PathError::NonFiniteField {
                    index,
                    field: "path_velocity",
                });
            }
        }

        for index in 1..samples.len() {
            if samples[index].timestamp < samples[index - 1].timestamp {
                return Err(PathError::NonMonotonicTimestamp { index });
            }
        }

        Ok(Self { samples })
    }

    /// The validated samples in time order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A path is never empty; this exists for clippy's `len`/`is_empty`
    /// pairing and always returns `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Tool positions in sample order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Extracts one scalar channel as a per-sample column.
    ///
    /// Samples that do not carry the channel get NaN so the column stays
    /// aligned with the sample sequence. Returns `None` when no sample
    /// carries the channel at all.
    #[must_use]
    pub fn scalar_channel(&self, name: &str) -> Option<Vec<f64>> {
        if !self.samples.iter().any(|s| s.scalars.contains_key(name)) {
            return None;
        }

        Some(
            self.samples
                .iter()
                .map(|s| s.scalar(name).unwrap_or(f64::NAN))
                .collect(),
        )
    }

    /// Names of all scalar channels present on any sample, sorted.
    ///
    /// Sorted so callers enumerating channels see a deterministic order.
    #[must_use]
    pub fn channel_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .samples
            .iter()
            .flat_map(|s| s.scalars.keys().cloned())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Length of the segment between samples `index` and `index + 1`, in mm.
    #[must_use]
    pub fn segment_length(&self, index: usize) -> Option<f64> {
        let a = self.samples.get(index)?;
        let b = self.samples.get(index + 1)?;
        Some((b.position - a.position).norm())
    }

    /// Total polyline arc length of the path, in mm.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|w| (w[1].position - w[0].position).norm())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Timestamp;

    fn sample(t: f64, x: f64) -> Sample {
        Sample::new(
            Timestamp::from_secs_f64(t),
            Point3::new(x, 0.0, 0.0),
            50.0,
            25.0,
        )
    }

    #[test]
    fn rejects_single_sample() {
        let err = ProcessPath::try_new(vec![sample(0.0, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            PathError::TooFewSamples {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_empty_batch() {
        assert!(ProcessPath::try_new(Vec::new()).is_err());
    }

    #[test]
    fn rejects_non_finite_position() {
        let mut bad = sample(0.1, 1.0);
        bad.position.z = f64::NAN;
        let err = ProcessPath::try_new(vec![sample(0.0, 0.0), bad]).unwrap_err();
        assert_eq!(
            err,
            PathError::NonFiniteField {
                index: 1,
                field: "position"
            }
        );
    }

    #[test]
    fn rejects_non_finite_velocity() {
        let mut bad = sample(0.1, 1.0);
        bad.feed_velocity = f64::INFINITY;
        let err = ProcessPath::try_new(vec![sample(0.0, 0.0), bad]).unwrap_err();
        assert_eq!(
            err,
            PathError::NonFiniteField {
                index: 1,
                field: "feed_velocity"
            }
        );
    }

    #[test]
    fn rejects_backwards_time() {
        let err =
            ProcessPath::try_new(vec![sample(1.0, 0.0), sample(0.5, 1.0)]).unwrap_err();
        assert_eq!(err, PathError::NonMonotonicTimestamp { index: 1 });
    }

    #[test]
    fn accepts_equal_timestamps() {
        // Non-decreasing, not strictly increasing: duplicate timestamps are
        // legal (loggers batch rows at the same tick).
        let path = ProcessPath::try_new(vec![sample(1.0, 0.0), sample(1.0, 1.0)]);
        assert!(path.is_ok());
    }

    #[test]
    fn zero_path_velocity_is_valid_input() {
        let mut stationary = sample(0.1, 1.0);
        stationary.path_velocity = 0.0;
        assert!(ProcessPath::try_new(vec![sample(0.0, 0.0), stationary]).is_ok());
    }

    #[test]
    fn scalar_channel_alignment() {
        let samples = vec![
            sample(0.0, 0.0).with_scalar("temperature", 400.0),
            sample(0.1, 1.0),
            sample(0.2, 2.0).with_scalar("temperature", 410.0),
        ];
        let path = ProcessPath::try_new(samples).unwrap();

        let col = path.scalar_channel("temperature").unwrap();
        assert_eq!(col.len(), 3);
        assert!((col[0] - 400.0).abs() < f64::EPSILON);
        assert!(col[1].is_nan());
        assert!((col[2] - 410.0).abs() < f64::EPSILON);

        assert!(path.scalar_channel("torque").is_none());
    }

    #[test]
    fn channel_names_sorted_and_deduped() {
        let samples = vec![
            sample(0.0, 0.0).with_scalar("torque", 1.0),
            sample(0.1, 1.0)
                .with_scalar("temperature", 2.0)
                .with_scalar("torque", 3.0),
        ];
        let path = ProcessPath::try_new(samples).unwrap();
        assert_eq!(path.channel_names(), vec!["temperature", "torque"]);
    }

    #[test]
    fn lengths() {
        let path =
            ProcessPath::try_new(vec![sample(0.0, 0.0), sample(0.1, 3.0), sample(0.2, 7.0)])
                .unwrap();
        assert!((path.segment_length(0).unwrap() - 3.0).abs() < 1e-12);
        assert!((path.segment_length(1).unwrap() - 4.0).abs() < 1e-12);
        assert!(path.segment_length(2).is_none());
        assert!((path.total_length() - 7.0).abs() < 1e-12);
    }
}
