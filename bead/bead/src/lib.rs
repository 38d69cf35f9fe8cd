//! Deposition telemetry to volumetric bead mesh.
//!
//! This umbrella crate re-exports the beadtrace pipeline crates behind a
//! unified API. The pipeline turns a time-ordered stream of process
//! telemetry (tool position, feed velocity, path velocity) into a swept
//! volumetric mesh of the deposited material, colored by a selected
//! process scalar.
//!
//! # Quick Start
//!
//! ```
//! use bead::prelude::*;
//! use nalgebra::Point3;
//!
//! // Normalized telemetry from the ingestion frontend.
//! let samples: Vec<Sample> = (0..50)
//!     .map(|i| {
//!         Sample::new(
//!             Timestamp::from_secs_f64(f64::from(i) * 0.1),
//!             Point3::new(f64::from(i) * 2.0, 0.0, 0.0),
//!             50.0,
//!             25.0,
//!         )
//!         .with_scalar("temperature", 380.0 + f64::from(i))
//!     })
//!     .collect();
//! let path = ProcessPath::try_new(samples).unwrap();
//!
//! // Calibration snapshot locks the build's physics constants.
//! let manager = CalibrationManager::with_defaults();
//! let snapshot = manager.snapshot();
//!
//! let params = BeadMeshParams::default()
//!     .with_color_channel("temperature")
//!     .with_lod(LodParams::uniform(5000));
//!
//! let result = build_bead_mesh(&path, &snapshot, &params).unwrap();
//! assert!(result.geometry.is_well_formed());
//! if result.diagnostics.has_warnings() {
//!     eprintln!("{}", result.diagnostics);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`telemetry`] - Sample records, validated process paths
//! - [`calibration`] - Feedstock geometry, calibration profiles and
//!   persistence
//! - [`physics`] - Conservation-of-mass bead area and cross-sections
//! - [`mesh`] - Frames, sweeping, scalar coloring, LOD, the build
//!   pipeline
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for telemetry and mesh geometry types

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Sample records and validated process paths.
pub use telemetry_types as telemetry;

/// Feedstock geometry, calibration profiles, and persistence.
pub use bead_calibration as calibration;

/// Conservation-of-mass bead area and cross-section computation.
pub use bead_physics as physics;

/// Frames, sweeping, scalar coloring, LOD, and the build pipeline.
pub use bead_mesh as mesh;

/// The most commonly used items, re-exported flat.
pub mod prelude {
    pub use bead_calibration::{
        CalibrationManager, CalibrationProfile, FeedstockProfile, FeedstockShape, UnitSystem,
    };
    pub use bead_mesh::lod::{LodParams, LodStrategy};
    pub use bead_mesh::{
        build_bead_mesh, BeadMeshParams, BeadMeshResult, BuildDiagnostics, BuildError,
        ColorScale, MeshGeometry, MeshIsland, MeshVertex, Rgba, ScalarDomain,
    };
    pub use bead_physics::{deposited_area, AreaSample, SectionProfile};
    pub use telemetry_types::{ProcessPath, Sample, Timestamp};
}
