//! Error types for telemetry input validation.

use thiserror::Error;

/// Result type for path construction.
pub type PathResult<T> = Result<T, PathError>;

/// Errors raised when a sample batch violates the input contract.
///
/// These are fatal to a build: a path that fails validation produces no
/// partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path needs at least two samples to sweep a solid.
    #[error("path needs at least {required} samples, got {actual}")]
    TooFewSamples {
        /// Minimum required samples.
        required: usize,
        /// Actual sample count.
        actual: usize,
    },

    /// A position or velocity field is NaN or infinite.
    #[error("non-finite {field} at sample {index}")]
    NonFiniteField {
        /// Index of the offending sample.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
    },

    /// Timestamps must be non-decreasing.
    #[error("timestamp at sample {index} precedes the previous sample")]
    NonMonotonicTimestamp {
        /// Index of the sample that went backwards in time.
        index: usize,
    },
}
