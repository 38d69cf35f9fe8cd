//! Conservation-of-mass area computation.

use bead_calibration::CalibrationProfile;

use crate::error::{PhysicsError, PhysicsResult};

/// Path velocities at or below this are treated as stationary, in mm/s.
pub const DEFAULT_STATIONARY_EPSILON: f64 = 1e-6;

/// Outcome of one per-sample area computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaSample {
    /// Material deposited with this cross-sectional area, mm².
    Deposited(f64),

    /// The tool was not moving; no material laid down at this sample.
    Stationary,
}

impl AreaSample {
    /// The deposited area, if any.
    #[must_use]
    pub const fn deposited(self) -> Option<f64> {
        match self {
            Self::Deposited(area) => Some(area),
            Self::Stationary => None,
        }
    }

    /// Whether the tool was stationary at this sample.
    #[must_use]
    pub const fn is_stationary(self) -> bool {
        matches!(self, Self::Stationary)
    }
}

/// Computes the instantaneous deposited cross-sectional area.
///
/// Conservation of mass: feedstock volume in per unit time equals bead
/// volume out per unit time, so
///
/// ```text
/// area = feed_velocity * feedstock_area * correction_factor / path_velocity
///        + area_offset
/// ```
///
/// # Arguments
///
/// * `feed_velocity` - feedstock advance rate, mm/s
/// * `path_velocity` - tool travel rate along the path, mm/s
/// * `calibration` - the build's calibration snapshot
/// * `stationary_epsilon` - path velocities at or below this magnitude are
///   stationary, not an error
///
/// # Errors
///
/// Returns [`PhysicsError::InvalidArea`] when the computed area is
/// negative or non-finite. Stationary samples are an [`Ok`] outcome.
///
/// # Example
///
/// ```
/// use bead_calibration::CalibrationProfile;
/// use bead_physics::{deposited_area, AreaSample, DEFAULT_STATIONARY_EPSILON};
///
/// let calibration = CalibrationProfile::default();
///
/// let stopped = deposited_area(50.0, 0.0, &calibration, DEFAULT_STATIONARY_EPSILON);
/// assert_eq!(stopped.unwrap(), AreaSample::Stationary);
/// ```
pub fn deposited_area(
    feed_velocity: f64,
    path_velocity: f64,
    calibration: &CalibrationProfile,
    stationary_epsilon: f64,
) -> PhysicsResult<AreaSample> {
    if path_velocity.abs() <= stationary_epsilon {
        return Ok(AreaSample::Stationary);
    }

    let area = feed_velocity * calibration.feedstock_area * calibration.correction_factor
        / path_velocity
        + calibration.area_offset;

    if !area.is_finite() || area < 0.0 {
        return Err(PhysicsError::InvalidArea {
            area,
            feed_velocity,
            path_velocity,
        });
    }

    Ok(AreaSample::Deposited(area))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_calibration() -> CalibrationProfile {
        CalibrationProfile::default()
    }

    #[test]
    fn conservation_of_mass_reference_values() {
        // 161.29 mm² bar fed at 50 mm/s while traveling 25 mm/s doubles
        // the cross-section.
        let area = deposited_area(50.0, 25.0, &default_calibration(), DEFAULT_STATIONARY_EPSILON)
            .unwrap()
            .deposited()
            .unwrap();
        assert_relative_eq!(area, 322.58, max_relative = 1e-9);
    }

    #[test]
    fn correction_factor_and_offset_apply() {
        let calibration = CalibrationProfile::new(100.0)
            .with_correction_factor(0.5)
            .with_area_offset(3.0);
        let area = deposited_area(10.0, 10.0, &calibration, DEFAULT_STATIONARY_EPSILON)
            .unwrap()
            .deposited()
            .unwrap();
        // 10 * 100 * 0.5 / 10 + 3 = 53
        assert_relative_eq!(area, 53.0, max_relative = 1e-12);
    }

    #[test]
    fn area_strictly_decreasing_in_path_velocity() {
        let calibration = default_calibration();
        let mut previous = f64::INFINITY;
        for path_velocity in [1.0, 2.0, 5.0, 10.0, 50.0, 200.0] {
            let area =
                deposited_area(50.0, path_velocity, &calibration, DEFAULT_STATIONARY_EPSILON)
                    .unwrap()
                    .deposited()
                    .unwrap();
            assert!(area < previous);
            previous = area;
        }
    }

    #[test]
    fn zero_path_velocity_never_raises() {
        let result = deposited_area(50.0, 0.0, &default_calibration(), DEFAULT_STATIONARY_EPSILON);
        assert_eq!(result.unwrap(), AreaSample::Stationary);
    }

    #[test]
    fn sub_epsilon_velocity_is_stationary() {
        let result = deposited_area(50.0, 1e-9, &default_calibration(), DEFAULT_STATIONARY_EPSILON);
        assert_eq!(result.unwrap(), AreaSample::Stationary);
    }

    #[test]
    fn negative_area_is_an_error() {
        let result = deposited_area(-50.0, 25.0, &default_calibration(), DEFAULT_STATIONARY_EPSILON);
        assert!(matches!(result, Err(PhysicsError::InvalidArea { .. })));
    }

    #[test]
    fn negative_offset_can_invalidate_slow_feed() {
        let calibration = CalibrationProfile::new(100.0).with_area_offset(-1000.0);
        let result = deposited_area(1.0, 100.0, &calibration, DEFAULT_STATIONARY_EPSILON);
        assert!(matches!(result, Err(PhysicsError::InvalidArea { .. })));
    }

    #[test]
    fn reverse_travel_is_not_stationary() {
        // A reversing tool still deposits; the sign comes out in the area.
        let result =
            deposited_area(50.0, -25.0, &default_calibration(), DEFAULT_STATIONARY_EPSILON);
        assert!(matches!(result, Err(PhysicsError::InvalidArea { .. })));
    }
}
