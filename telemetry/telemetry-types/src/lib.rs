//! Process telemetry types for beadtrace.
//!
//! This crate provides the foundational types for deposition process
//! telemetry used across:
//! - Stream normalizers (CSV / G-code ingestion frontends)
//! - The bead physics and meshing pipeline
//! - Dataset storage (serialized sample batches)
//!
//! # Types
//!
//! - [`Timestamp`] - Nanosecond-precision sample time
//! - [`Sample`] - One telemetry record (position, velocities, scalar channels)
//! - [`ProcessPath`] - A validated, ordered batch of samples
//!
//! # The normalizer boundary
//!
//! Ingestion frontends produce [`Sample`] values and hand them to
//! [`ProcessPath::try_new`], which enforces the input contract once:
//! at least two samples, finite position and velocity fields, and
//! non-decreasing timestamps. Everything downstream of a [`ProcessPath`]
//! can rely on that contract and never re-validates.
//!
//! # Units
//!
//! Positions are millimeters, velocities millimeters per second. Scalar
//! channels carry whatever unit the process column had (degrees Celsius,
//! newton-meters, ...); the pipeline only ever normalizes them for display.
//!
//! # Example
//!
//! ```
//! use telemetry_types::{ProcessPath, Sample, Timestamp};
//! use nalgebra::Point3;
//!
//! let samples = vec![
//!     Sample::new(Timestamp::from_secs_f64(0.0), Point3::new(0.0, 0.0, 0.0), 50.0, 25.0),
//!     Sample::new(Timestamp::from_secs_f64(0.1), Point3::new(1.0, 0.0, 0.0), 50.0, 25.0),
//! ];
//!
//! let path = ProcessPath::try_new(samples).unwrap();
//! assert_eq!(path.len(), 2);
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
mod path;
mod sample;
mod time;

pub use error::{PathError, PathResult};
pub use path::ProcessPath;
pub use sample::{Sample, ScalarMap};
pub use time::Timestamp;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
