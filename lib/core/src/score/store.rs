//! Persistence of the health score.
//!
//! The score is kept in a small JSON file under the user's config directory
//! and written whenever a drag on the slider settles.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vitaline_common::error::HealthError;

use super::track::SCORE_MAX;

/// Score shown when nothing has been persisted yet.
pub const DEFAULT_SCORE: u32 = 1500;

#[derive(Serialize, Deserialize)]
struct ScoreFile {
    health_score: u32,
}

pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Open the store at its default location, creating the directory if
    /// needed.
    pub fn open() -> Result<Self, HealthError> {
        let dir = data_dir()?;

        Ok(Self {
            path: dir.join("health_score.json"),
        })
    }

    /// Open a store backed by a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the saved score, falling back to [`DEFAULT_SCORE`] when nothing
    /// has been written yet. Persisted values above the scale maximum are
    /// clamped on the way in.
    pub fn load(&self) -> Result<u32, HealthError> {
        if !self.path.exists() {
            return Ok(DEFAULT_SCORE);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let file: ScoreFile = serde_json::from_str(&content)?;

        Ok(file.health_score.min(SCORE_MAX))
    }

    /// Save a score, clamped to the scale maximum.
    pub fn save(&self, score: u32) -> Result<(), HealthError> {
        let file = ScoreFile {
            health_score: score.min(SCORE_MAX),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!("saved health score {} to {}", score, self.path.display());

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn data_dir() -> Result<PathBuf, HealthError> {
    let dir = dirs::home_dir()
        .ok_or(HealthError::DataDir)?
        .join(".config")
        .join("vitaline");

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
