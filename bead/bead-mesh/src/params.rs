//! Build parameters.

use bead_physics::DEFAULT_STATIONARY_EPSILON;

use crate::color::{ColorScale, ScalarDomain};
use crate::lod::LodParams;

/// Parameters for a bead mesh build.
///
/// # Example
///
/// ```
/// use bead_mesh::{BeadMeshParams, ColorScale};
/// use bead_mesh::lod::LodParams;
///
/// let params = BeadMeshParams::default()
///     .with_color_channel("temperature")
///     .with_color_scale(ColorScale::Inferno)
///     .with_lod(LodParams::uniform(5000));
///
/// assert_eq!(params.color_channel.as_deref(), Some("temperature"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BeadMeshParams {
    /// Scalar channel to color vertices by. `None` leaves every vertex at
    /// the scale's low end.
    pub color_channel: Option<String>,

    /// Gradient used to map normalized scalars to colors.
    pub color_scale: ColorScale,

    /// Explicit scalar domain. `None` auto-computes from the data.
    pub scalar_domain: Option<ScalarDomain>,

    /// Optional level-of-detail reduction applied before meshing.
    pub lod: Option<LodParams>,

    /// Path velocities at or below this magnitude are stationary, mm/s.
    pub stationary_epsilon: f64,
}

impl Default for BeadMeshParams {
    fn default() -> Self {
        Self {
            color_channel: None,
            color_scale: ColorScale::default(),
            scalar_domain: None,
            lod: None,
            stationary_epsilon: DEFAULT_STATIONARY_EPSILON,
        }
    }
}

impl BeadMeshParams {
    /// Sets the scalar channel to color by.
    #[must_use]
    pub fn with_color_channel(mut self, name: impl Into<String>) -> Self {
        self.color_channel = Some(name.into());
        self
    }

    /// Sets the color scale.
    #[must_use]
    pub fn with_color_scale(mut self, scale: ColorScale) -> Self {
        self.color_scale = scale;
        self
    }

    /// Sets an explicit scalar domain instead of auto-computing it.
    #[must_use]
    pub fn with_scalar_domain(mut self, min: f64, max: f64) -> Self {
        self.scalar_domain = Some(ScalarDomain::new(min, max));
        self
    }

    /// Enables level-of-detail reduction.
    #[must_use]
    pub fn with_lod(mut self, lod: LodParams) -> Self {
        self.lod = Some(lod);
        self
    }

    /// Overrides the stationary velocity epsilon.
    #[must_use]
    pub fn with_stationary_epsilon(mut self, epsilon: f64) -> Self {
        self.stationary_epsilon = epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = BeadMeshParams::default();
        assert!(params.color_channel.is_none());
        assert!(params.scalar_domain.is_none());
        assert!(params.lod.is_none());
        assert!(params.stationary_epsilon > 0.0);
    }

    #[test]
    fn test_builder_chain() {
        let params = BeadMeshParams::default()
            .with_color_channel("torque")
            .with_color_scale(ColorScale::Grayscale)
            .with_scalar_domain(0.0, 100.0)
            .with_lod(LodParams::curvature(1000))
            .with_stationary_epsilon(1e-3);

        assert_eq!(params.color_channel.as_deref(), Some("torque"));
        assert_eq!(params.color_scale, ColorScale::Grayscale);
        assert!(params.scalar_domain.is_some());
        assert_eq!(params.lod, Some(LodParams::curvature(1000)));
        assert!((params.stationary_epsilon - 1e-3).abs() < f64::EPSILON);
    }
}
