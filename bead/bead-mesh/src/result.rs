//! Build results and diagnostics.

use crate::geometry::MeshGeometry;

/// Counts of recoverable conditions encountered during a build.
///
/// Returned alongside the mesh so the caller can warn the user without
/// failing the visualization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildDiagnostics {
    /// Samples in the input path.
    pub input_samples: usize,

    /// Samples surviving level-of-detail reduction.
    pub kept_samples: usize,

    /// Samples that became cross-sections in emitted islands.
    pub meshed_samples: usize,

    /// Samples where the tool was stationary (carry-forward applied).
    pub stationary_samples: usize,

    /// Samples whose physics produced a negative or non-finite area.
    pub invalid_physics_samples: usize,

    /// Samples whose deposited area was zero (zero-size cross-section).
    pub zero_area_samples: usize,

    /// Zero-length path segments (frame carried forward).
    pub zero_length_segments: usize,

    /// Kept samples that emitted no geometry (degenerate, or in a run too
    /// short to sweep).
    pub dropped_samples: usize,

    /// Scalar values filled by carry-forward.
    pub filled_scalars: usize,

    /// Islands emitted.
    pub islands: usize,
}

impl BuildDiagnostics {
    /// Whether anything recoverable happened that the caller may want to
    /// surface to the user.
    #[must_use]
    pub const fn has_warnings(&self) -> bool {
        self.stationary_samples > 0
            || self.invalid_physics_samples > 0
            || self.zero_area_samples > 0
            || self.zero_length_segments > 0
            || self.dropped_samples > 0
    }
}

impl std::fmt::Display for BuildDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bead mesh: {}/{} samples meshed into {} island(s) \
             ({} stationary, {} invalid physics, {} zero area, \
             {} zero-length segments, {} dropped)",
            self.meshed_samples,
            self.kept_samples,
            self.islands,
            self.stationary_samples,
            self.invalid_physics_samples,
            self.zero_area_samples,
            self.zero_length_segments,
            self.dropped_samples
        )
    }
}

/// A completed bead mesh build.
#[derive(Debug, Clone, PartialEq)]
pub struct BeadMeshResult {
    /// The output mesh.
    pub geometry: MeshGeometry,

    /// Recoverable-condition tallies.
    pub diagnostics: BuildDiagnostics,
}
