// Profile data source.
// Supplies the single Profile record the site renders: either the built-in
// record or a JSON file named by PROFILE_PATH. This is the only layer that
// rejects malformed data; the view never null-guards.

pub mod sample;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::Profile;

pub use sample::sample_profile;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Returns the profile at `path`, or the built-in record when no path is configured.
pub fn load_profile(path: Option<&Path>) -> Result<Profile, ProfileError> {
    match path {
        Some(path) => load_profile_file(path),
        None => {
            info!("PROFILE_PATH not set, using built-in profile");
            Ok(sample_profile())
        }
    }
}

/// Reads and deserializes a JSON profile record.
pub fn load_profile_file(path: &Path) -> Result<Profile, ProfileError> {
    debug!("Reading profile from {}", path.display());

    let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let profile: Profile = serde_json::from_str(&raw).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded profile for {} ({} experience, {} education entries)",
        profile.name,
        profile.experience.len(),
        profile.education.len()
    );
    Ok(profile)
}
