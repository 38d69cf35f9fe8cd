//! Feedstock geometry.

use serde::{Deserialize, Serialize};

/// Millimeters per inch.
const MM_PER_INCH: f64 = 25.4;

/// Unit system of the feedstock dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Dimensions in millimeters.
    Millimeters,
    /// Dimensions in inches.
    Inches,
}

impl UnitSystem {
    /// Conversion factor from this unit to millimeters.
    #[must_use]
    pub const fn to_mm(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Inches => MM_PER_INCH,
        }
    }
}

/// Cross-sectional shape of the feedstock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeedstockShape {
    /// Square bar.
    Square {
        /// Side length.
        side: f64,
    },
    /// Round wire or rod.
    Round {
        /// Diameter.
        diameter: f64,
    },
    /// Rectangular bar.
    Rectangular {
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
}

/// Constant geometry of the feed material.
///
/// Loaded once at calibration load time and immutable during a mesh build.
/// The derived cross-sectional area feeds the conservation-of-mass
/// computation in `bead-physics`.
///
/// # Example
///
/// ```
/// use bead_calibration::{FeedstockProfile, FeedstockShape, UnitSystem};
///
/// // A 0.5 in square bar, dimensioned in inches.
/// let bar = FeedstockProfile::new(
///     FeedstockShape::Square { side: 0.5 },
///     UnitSystem::Inches,
/// );
/// assert!((bar.area_mm2() - 161.29).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedstockProfile {
    /// Cross-sectional shape and dimensions.
    pub shape: FeedstockShape,

    /// Unit system the dimensions are expressed in.
    pub units: UnitSystem,
}

impl FeedstockProfile {
    /// Creates a feedstock profile.
    #[must_use]
    pub const fn new(shape: FeedstockShape, units: UnitSystem) -> Self {
        Self { shape, units }
    }

    /// Cross-sectional area in mm², converting from the declared unit
    /// system.
    #[must_use]
    pub fn area_mm2(&self) -> f64 {
        let scale = self.units.to_mm();
        match self.shape {
            FeedstockShape::Square { side } => {
                let side = side * scale;
                side * side
            }
            FeedstockShape::Round { diameter } => {
                let d = diameter * scale;
                std::f64::consts::PI * d * d / 4.0
            }
            FeedstockShape::Rectangular { width, height } => {
                (width * scale) * (height * scale)
            }
        }
    }
}

impl Default for FeedstockProfile {
    /// A 12.7 mm (0.5 in) square bar, the common solid-state deposition
    /// feedstock.
    fn default() -> Self {
        Self::new(FeedstockShape::Square { side: 12.7 }, UnitSystem::Millimeters)
    }
}
