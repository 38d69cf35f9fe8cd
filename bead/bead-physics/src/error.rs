//! Error types for bead physics.

use thiserror::Error;

/// Result type for physics computations.
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Errors from bead physics computations.
///
/// Recovered locally by the meshing layer: the offending sample is marked
/// degenerate and the build continues.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// The computed area was negative or non-finite.
    #[error(
        "invalid deposited area {area} (feed_velocity={feed_velocity}, path_velocity={path_velocity})"
    )]
    InvalidArea {
        /// The offending computed area.
        area: f64,
        /// Feed velocity input, mm/s.
        feed_velocity: f64,
        /// Path velocity input, mm/s.
        path_velocity: f64,
    },
}
