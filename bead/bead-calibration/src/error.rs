//! Error types for calibration loading and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for calibration operations.
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Errors that can occur while loading, validating, or persisting a
/// calibration profile.
///
/// Load failures are fatal at manager construction time; callers that
/// prefer to proceed with defaults use
/// [`crate::CalibrationManager::load_or_default`].
#[derive(Debug, Error)]
pub enum CalibrationError {
    /// The profile file could not be found.
    #[error("calibration file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The profile failed validation.
    #[error("invalid calibration profile: {reason}")]
    InvalidProfile {
        /// What was wrong with the profile.
        reason: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalibrationError {
    /// Create an `InvalidProfile` error with the given reason.
    #[must_use]
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            reason: reason.into(),
        }
    }
}
