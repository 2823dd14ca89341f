//! TOML-based application configuration.
//!
//! Stores the pacing knobs for the two engines:
//! - Announcement fade timings (fade-in / hold / fade-out)
//! - Minigame grid shape and evaluation delays
//! - An optional fixed RNG seed for reproducible draws and deals
//!
//! Configuration is stored at `~/.config/featherbook/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::collection::CollectionTimings;
use crate::error::ConfigError;
use crate::minigame::GameConfig;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/featherbook/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub collection: CollectionTimings,
    #[serde(default)]
    pub game: GameConfig,
    /// Fixed RNG seed. Unset means seed from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|_| ConfigError::NoConfigDir)?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults;
    /// an unreadable or malformed file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
