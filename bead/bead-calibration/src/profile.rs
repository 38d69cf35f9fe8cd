//! Calibration profiles.

use serde::{Deserialize, Serialize};

use crate::FeedstockProfile;

/// The empirical constants applied to every bead physics computation.
///
/// A profile is consumed as a whole snapshot: it is replaced atomically by
/// [`crate::CalibrationManager::apply`], never merged field by field, so a
/// build can never observe a partially-applied calibration.
///
/// # Fields
///
/// - `feedstock_area`: feedstock cross-sectional area, mm²
/// - `correction_factor`: dimensionless deposition efficiency correction
/// - `area_offset`: additive bead area correction, mm²
/// - `width_multiplier`: empirical bead flattening factor used to split a
///   bead area into width × height
///
/// # Example
///
/// ```
/// use bead_calibration::CalibrationProfile;
///
/// let profile = CalibrationProfile::default()
///     .with_correction_factor(0.95)
///     .with_area_offset(1.5);
///
/// assert!(profile.is_valid());
/// assert!((profile.feedstock_area - 161.29).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Feedstock cross-sectional area in mm².
    pub feedstock_area: f64,

    /// Dimensionless deposition correction factor.
    pub correction_factor: f64,

    /// Additive bead area offset in mm².
    pub area_offset: f64,

    /// Empirical bead width multiplier.
    pub width_multiplier: f64,
}

impl Default for CalibrationProfile {
    /// Defaults for a 12.7 mm square bar with no corrections applied.
    fn default() -> Self {
        Self {
            feedstock_area: FeedstockProfile::default().area_mm2(),
            correction_factor: 1.0,
            area_offset: 0.0,
            width_multiplier: 1.654,
        }
    }
}

impl CalibrationProfile {
    /// Creates a profile for the given feedstock area with no corrections.
    #[must_use]
    pub fn new(feedstock_area: f64) -> Self {
        Self {
            feedstock_area,
            ..Self::default()
        }
    }

    /// Creates a profile from feedstock geometry.
    #[must_use]
    pub fn from_feedstock(feedstock: &FeedstockProfile) -> Self {
        Self::new(feedstock.area_mm2())
    }

    /// Sets the correction factor.
    #[must_use]
    pub const fn with_correction_factor(mut self, factor: f64) -> Self {
        self.correction_factor = factor;
        self
    }

    /// Sets the area offset.
    #[must_use]
    pub const fn with_area_offset(mut self, offset: f64) -> Self {
        self.area_offset = offset;
        self
    }

    /// Sets the width multiplier.
    #[must_use]
    pub const fn with_width_multiplier(mut self, multiplier: f64) -> Self {
        self.width_multiplier = multiplier;
        self
    }

    /// Validates the profile.
    ///
    /// Feedstock area, correction factor, and width multiplier must be
    /// finite and positive; the area offset must be finite (it may be
    /// negative to model undersized beads).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.feedstock_area.is_finite()
            && self.feedstock_area > 0.0
            && self.correction_factor.is_finite()
            && self.correction_factor > 0.0
            && self.area_offset.is_finite()
            && self.width_multiplier.is_finite()
            && self.width_multiplier > 0.0
    }
}
