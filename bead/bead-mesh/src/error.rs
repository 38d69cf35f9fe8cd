//! Error types for mesh building.

use telemetry_types::PathError;
use thiserror::Error;

/// Result type for mesh building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Fatal build errors.
///
/// Recoverable per-sample conditions (stationary tool, invalid physics,
/// zero-length segments) never surface here; they are tallied in
/// [`crate::BuildDiagnostics`] instead.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The input batch violated the path contract.
    #[error("invalid input path: {0}")]
    InvalidInput(#[from] PathError),

    /// The requested color channel is present on no sample.
    #[error("unknown scalar channel: {name}")]
    UnknownChannel {
        /// The channel name that was requested.
        name: String,
    },

    /// Degenerate samples or segments spanned the entire path.
    #[error("no valid geometry could be generated: {reason}")]
    NoValidGeometry {
        /// Why nothing could be swept.
        reason: String,
    },
}
