//! Calibration lifecycle management.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{CalibrationError, CalibrationResult};
use crate::CalibrationProfile;

/// Owns the active calibration profile and its durable persistence.
///
/// The manager is the only mutable calibration state in the system, and it
/// mutates in exactly one way: [`CalibrationManager::apply`] replaces the
/// whole profile. Builds take an immutable copy through
/// [`CalibrationManager::snapshot`] at build start, so a build "locks" the
/// profile it was given even if the live profile changes before the result
/// is returned.
///
/// Applying and persisting are separate operations: `apply` changes the
/// in-memory profile, [`CalibrationManager::persist`] writes it to disk.
#[derive(Debug, Clone)]
pub struct CalibrationManager {
    active: CalibrationProfile,
}

impl CalibrationManager {
    /// Creates a manager with a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvalidProfile`] if the profile fails
    /// [`CalibrationProfile::is_valid`].
    pub fn new(profile: CalibrationProfile) -> CalibrationResult<Self> {
        validate(&profile)?;
        Ok(Self { active: profile })
    }

    /// Creates a manager with the default profile.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            active: CalibrationProfile::default(),
        }
    }

    /// Loads a manager from a JSON profile file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, not valid
    /// JSON, or parses into an invalid profile.
    pub fn load(path: impl AsRef<Path>) -> CalibrationResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CalibrationError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let profile: CalibrationProfile = serde_json::from_reader(reader)?;
        validate(&profile)?;

        info!(path = %path.display(), "Loaded calibration profile");
        Ok(Self { active: profile })
    }

    /// Loads a manager from a JSON profile file, falling back to defaults.
    ///
    /// Callers that prefer to proceed with safe defaults rather than fail
    /// the whole pipeline use this instead of [`CalibrationManager::load`].
    /// The fallback is logged.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(manager) => manager,
            Err(err) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "Calibration load failed, using defaults"
                );
                Self::with_defaults()
            }
        }
    }

    /// Replaces the active profile with a new one, atomically.
    ///
    /// The whole profile is swapped; fields are never merged, so no
    /// observer can see a half-applied calibration. In-flight builds hold
    /// their own snapshots and are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvalidProfile`] if the new profile
    /// fails validation; the active profile is left unchanged.
    pub fn apply(&mut self, profile: CalibrationProfile) -> CalibrationResult<()> {
        validate(&profile)?;
        self.active = profile;
        debug!("Applied calibration profile");
        Ok(())
    }

    /// Returns an immutable copy of the active profile for a build.
    #[must_use]
    pub const fn snapshot(&self) -> CalibrationProfile {
        self.active
    }

    /// Writes the active profile to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn persist(&self, path: impl AsRef<Path>) -> CalibrationResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.active)?;

        info!(path = %path.display(), "Persisted calibration profile");
        Ok(())
    }
}

impl Default for CalibrationManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn validate(profile: &CalibrationProfile) -> CalibrationResult<()> {
    if profile.is_valid() {
        Ok(())
    } else {
        Err(CalibrationError::invalid_profile(format!(
            "feedstock_area={}, correction_factor={}, area_offset={}, width_multiplier={}",
            profile.feedstock_area,
            profile.correction_factor,
            profile.area_offset,
            profile.width_multiplier
        )))
    }
}
