//! Bead cross-section profiles.

/// A rectangular bead cross-section derived from a deposited area.
///
/// The deposition process flattens the bead: it spreads wider than it is
/// tall, by an empirically calibrated ratio. The split is
/// `width = sqrt(area * width_multiplier)`, `height = area / width`, which
/// preserves the area exactly while letting the multiplier come from
/// calibration rather than a hardcoded constant.
///
/// # Example
///
/// ```
/// use bead_physics::SectionProfile;
///
/// let section = SectionProfile::from_area(322.58, 1.654);
/// assert!((section.width * section.height - 322.58).abs() < 1e-9);
/// assert!(section.width > section.height);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProfile {
    /// Cross-sectional area, mm².
    pub area: f64,

    /// Bead width (lateral extent), mm.
    pub width: f64,

    /// Bead height (vertical extent), mm.
    pub height: f64,
}

impl SectionProfile {
    /// Splits a deposited area into the bead rectangle.
    ///
    /// A non-positive or non-finite area yields the zero profile, flagged
    /// degenerate; the sweep skips side faces for it while the path
    /// advances.
    #[must_use]
    pub fn from_area(area: f64, width_multiplier: f64) -> Self {
        if !area.is_finite() || area <= 0.0 {
            return Self::zero();
        }

        let width = (area * width_multiplier).sqrt();
        if !width.is_finite() || width <= 0.0 {
            return Self::zero();
        }

        Self {
            area,
            width,
            height: area / width,
        }
    }

    /// The zero-size degenerate profile.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            area: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Whether this profile is too small to sweep.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Half the bead width, mm.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half the bead height, mm.
    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}
