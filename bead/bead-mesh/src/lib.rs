//! Swept bead mesh generation for beadtrace.
//!
//! Turns a validated [`ProcessPath`](telemetry_types::ProcessPath) plus a
//! calibration snapshot into a volumetric triangle mesh of the deposited
//! material, with per-vertex scalar coloring for inspection.
//!
//! # Pipeline
//!
//! [`build_bead_mesh`] runs the stages in order:
//!
//! 1. Optional deterministic level-of-detail reduction ([`lod`])
//! 2. Per-sample bead physics (area, then width × height section)
//! 3. Parallel-transport frames along the path ([`path_frames`])
//! 4. Island partitioning around degenerate samples and segments
//! 5. Rectangle sweep with end caps per island
//! 6. Scalar normalization and color assignment
//!
//! The build is a pure function of its inputs: no shared mutable state,
//! and identical inputs produce bit-identical [`MeshGeometry`].
//!
//! # Degenerate handling
//!
//! Stationary samples (zero path velocity), invalid physics results, and
//! zero-length segments never abort a build. Each splits the path into
//! independent mesh islands and is tallied in [`BuildDiagnostics`]; the
//! build only fails when *no* island can be swept.
//!
//! # Example
//!
//! ```
//! use bead_calibration::CalibrationProfile;
//! use bead_mesh::{build_bead_mesh, BeadMeshParams};
//! use telemetry_types::{ProcessPath, Sample, Timestamp};
//! use nalgebra::Point3;
//!
//! let samples: Vec<Sample> = (0..3)
//!     .map(|i| {
//!         Sample::new(
//!             Timestamp::from_secs_f64(f64::from(i)),
//!             Point3::new(f64::from(i) * 10.0, 0.0, 0.0),
//!             50.0,
//!             25.0,
//!         )
//!     })
//!     .collect();
//! let path = ProcessPath::try_new(samples).unwrap();
//!
//! let result = build_bead_mesh(
//!     &path,
//!     &CalibrationProfile::default(),
//!     &BeadMeshParams::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.geometry.islands.len(), 1);
//! assert!(!result.geometry.faces.is_empty());
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

mod build;
mod color;
mod error;
mod frame;
mod geometry;
pub mod lod;
mod params;
mod result;
mod sweep;

pub use build::build_bead_mesh;
pub use color::{ColorScale, Rgba, ScalarDomain};
pub use error::{BuildError, BuildResult};
pub use frame::{path_frames, Frame, PathFrames};
pub use geometry::{MeshGeometry, MeshIsland, MeshVertex};
pub use params::BeadMeshParams;
pub use result::{BeadMeshResult, BuildDiagnostics};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
