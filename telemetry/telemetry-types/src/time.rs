//! Sample timing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nanosecond-precision sample timestamp.
///
/// Telemetry loggers report time as floating-point seconds since the start
/// of the pass; storing nanoseconds as an integer keeps ordering exact and
/// makes the monotonicity check in `ProcessPath` immune to floating-point
/// comparison surprises.
///
/// # Example
///
/// ```
/// use telemetry_types::Timestamp;
///
/// let ts = Timestamp::from_secs_f64(2.5);
/// assert_eq!(ts.as_nanos(), 2_500_000_000);
/// assert!((ts.as_secs_f64() - 2.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    /// Nanoseconds since the start of the deposition pass.
    nanos: u64,
}

impl Timestamp {
    /// Creates a timestamp from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a timestamp from seconds (floating point).
    ///
    /// Negative values clamp to zero.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Self {
        let nanos = (secs * 1e9).max(0.0) as u64;
        Self { nanos }
    }

    /// Returns the timestamp as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the timestamp as seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the zero timestamp.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Elapsed seconds from `earlier` to `self`, saturating at zero.
    ///
    /// # Example
    ///
    /// ```
    /// use telemetry_types::Timestamp;
    ///
    /// let a = Timestamp::from_secs_f64(1.0);
    /// let b = Timestamp::from_secs_f64(3.5);
    /// assert!((b.elapsed_since(a) - 2.5).abs() < 1e-9);
    /// assert!(a.elapsed_since(b).abs() < 1e-9);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_since(self, earlier: Self) -> f64 {
        self.nanos.saturating_sub(earlier.nanos) as f64 / 1e9
    }
}
