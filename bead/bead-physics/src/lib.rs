//! Bead deposition physics for beadtrace.
//!
//! Converts feed and path velocities into a deposited bead cross-section
//! using conservation of mass: the volume of feedstock entering the tool
//! per unit time equals the volume of material laid down per unit time.
//!
//! Two operations live here:
//!
//! - [`deposited_area`] - instantaneous bead cross-sectional area from
//!   velocities and the active [`CalibrationProfile`]
//! - [`SectionProfile::from_area`] - split an area into the bead's
//!   width × height rectangle using the calibrated width multiplier
//!
//! # Stationary samples
//!
//! A path velocity at or below the stationary epsilon means the tool is
//! not moving; no material is being laid down and the division is
//! physically meaningless. That case is *not* an error — it yields
//! [`AreaSample::Stationary`] and the meshing layer handles the
//! carry-forward policy. Only a non-finite or negative computed area is an
//! error, and the caller recovers from it per sample.
//!
//! # Example
//!
//! ```
//! use bead_calibration::CalibrationProfile;
//! use bead_physics::{deposited_area, AreaSample, DEFAULT_STATIONARY_EPSILON};
//!
//! let calibration = CalibrationProfile::default();
//! let area = deposited_area(50.0, 25.0, &calibration, DEFAULT_STATIONARY_EPSILON).unwrap();
//!
//! match area {
//!     AreaSample::Deposited(a) => assert!((a - 322.58).abs() < 1e-9),
//!     AreaSample::Stationary => unreachable!(),
//! }
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod area;
mod error;
mod section;

pub use area::{deposited_area, AreaSample, DEFAULT_STATIONARY_EPSILON};
pub use error::{PhysicsError, PhysicsResult};
pub use section::SectionProfile;
