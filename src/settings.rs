//! Round settings
//!
//! Chosen in the lobby before a round and fixed for its duration. Persisted
//! as JSON; a missing or broken file falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Round configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSettings {
    /// Total agents including the human (2-10)
    pub player_count: usize,
    /// Round length in seconds
    pub round_secs: u32,
    pub map_id: String,
    /// RNG seed; `None` picks one at startup
    pub seed: Option<u64>,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            player_count: 2,
            round_secs: 120,
            map_id: "nature".to_string(),
            seed: None,
        }
    }
}

impl RoundSettings {
    /// Clamp out-of-range values instead of rejecting them
    pub fn validated(mut self) -> Self {
        self.player_count = self.player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.round_secs = self.round_secs.max(1);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: RoundSettings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let loaded = std::fs::read_to_string(path)
            .map_err(SettingsError::from)
            .and_then(|json| Self::from_json(&json));

        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
