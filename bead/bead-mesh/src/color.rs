//! Scalar-to-color mapping.
//!
//! Normalizes a per-vertex process scalar into [0, 1] over a domain and
//! looks the result up in a gradient color scale.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255).
    pub a: u8,
}

impl Rgba {
    /// Creates an opaque color from RGB components.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from floating point RGB values in [0, 1].
    ///
    /// Values are clamped to the valid range.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: values are clamped to [0.0, 1.0] before * 255.0
    pub fn from_float(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.0) as u8,
            g: (g.clamp(0.0, 1.0) * 255.0) as u8,
            b: (b.clamp(0.0, 1.0) * 255.0) as u8,
            a: 255,
        }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Linear interpolation between two values.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Anchor colors for the built-in scales, evenly spaced over [0, 1].
type Stops = &'static [[u8; 3]];

const VIRIDIS_STOPS: Stops = &[
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

const INFERNO_STOPS: Stops = &[
    [0, 0, 4],
    [87, 16, 110],
    [188, 55, 84],
    [249, 142, 9],
    [252, 255, 164],
];

const GRAYSCALE_STOPS: Stops = &[[0, 0, 0], [255, 255, 255]];

/// A gradient color scale for scalar visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorScale {
    /// Perceptually uniform green-to-yellow scale.
    #[default]
    Viridis,
    /// Dark-to-bright heat scale.
    Inferno,
    /// Plain black-to-white ramp.
    Grayscale,
}

impl ColorScale {
    const fn stops(self) -> Stops {
        match self {
            Self::Viridis => VIRIDIS_STOPS,
            Self::Inferno => INFERNO_STOPS,
            Self::Grayscale => GRAYSCALE_STOPS,
        }
    }

    /// Samples the scale at a normalized position.
    ///
    /// `t` is clamped to [0, 1]; NaN maps to the low end.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_mesh::{ColorScale, Rgba};
    ///
    /// let low = ColorScale::Grayscale.sample(0.0);
    /// let high = ColorScale::Grayscale.sample(1.0);
    /// assert_eq!(low, Rgba::BLACK);
    /// assert_eq!(high, Rgba::WHITE);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(self, t: f64) -> Rgba {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let last = stops.len() - 1;
        let scaled = t * last as f64;
        let lower = (scaled.floor() as usize).min(last.saturating_sub(1));
        let frac = scaled - lower as f64;

        let a = stops[lower];
        let b = stops[lower + 1];
        Rgba::from_float(
            lerp(f64::from(a[0]), f64::from(b[0]), frac) / 255.0,
            lerp(f64::from(a[1]), f64::from(b[1]), frac) / 255.0,
            lerp(f64::from(a[2]), f64::from(b[2]), frac) / 255.0,
        )
    }
}

/// The scalar range a color scale is stretched over.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarDomain {
    /// Value mapped to the low end of the scale.
    pub min: f64,
    /// Value mapped to the high end of the scale.
    pub max: f64,
}

impl ScalarDomain {
    /// An explicit domain.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Computes the domain from observed values, skipping non-finite ones.
    ///
    /// Returns `None` when no finite value exists.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min <= max).then_some(Self { min, max })
    }

    /// Normalizes a value into [0, 1] over this domain.
    ///
    /// A degenerate domain (min == max) normalizes everything to 0.5 so a
    /// constant channel renders mid-scale instead of dividing by zero.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Fills missing (NaN) values by nearest-neighbor carry-forward.
///
/// Forward-fills from the previous valid value, then back-fills any
/// leading gap from the first valid value. Returns the number of values
/// filled. Values that remain NaN (an all-NaN column) are left in place
/// for the caller to default.
pub(crate) fn carry_forward_fill(values: &mut [f64]) -> usize {
    let mut filled = 0;

    let mut last_valid: Option<f64> = None;
    for v in values.iter_mut() {
        if v.is_nan() {
            if let Some(prev) = last_valid {
                *v = prev;
                filled += 1;
            }
        } else {
            last_valid = Some(*v);
        }
    }

    // Back-fill the leading gap.
    if let Some(first_valid) = values.iter().copied().find(|v| !v.is_nan()) {
        for v in values.iter_mut() {
            if v.is_nan() {
                *v = first_valid;
                filled += 1;
            } else {
                break;
            }
        }
    }

    filled
}
