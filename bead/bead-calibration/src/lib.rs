//! Deposition calibration for beadtrace.
//!
//! Bead physics depends on a handful of empirical constants: the feedstock
//! cross-sectional area, a dimensionless correction factor, an additive
//! area offset, and the bead width multiplier. This crate owns those
//! constants, their durable JSON persistence, and the snapshot discipline
//! that keeps mesh builds reproducible.
//!
//! # Snapshot discipline
//!
//! A mesh build never reads live calibration state. It takes a
//! [`CalibrationProfile`] copy from [`CalibrationManager::snapshot`] at
//! build start and uses it immutably; applying a new profile mid-build has
//! no effect on builds already in flight. Persisting a profile
//! ([`CalibrationManager::persist`]) is an explicit operation, separate
//! from applying it in memory.
//!
//! # Example
//!
//! ```
//! use bead_calibration::{CalibrationManager, CalibrationProfile};
//!
//! let mut manager = CalibrationManager::with_defaults();
//! let snapshot = manager.snapshot();
//!
//! // A later apply does not disturb the snapshot.
//! let tuned = CalibrationProfile::default().with_correction_factor(0.93);
//! manager.apply(tuned).unwrap();
//!
//! assert!((snapshot.correction_factor - 1.0).abs() < 1e-12);
//! assert!((manager.snapshot().correction_factor - 0.93).abs() < 1e-12);
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

mod error;
mod feedstock;
mod manager;
mod profile;

pub use error::{CalibrationError, CalibrationResult};
pub use feedstock::{FeedstockProfile, FeedstockShape, UnitSystem};
pub use manager::CalibrationManager;
pub use profile::CalibrationProfile;
