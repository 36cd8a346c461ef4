//! Runtime configuration, read from a TOML file next to the executable's working directory.
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use crate::log;
use crate::utils::constants::cube_constants::{
    SHRINK_DURATION_SECS, SPIN_STEP_RAD, WIN_SPIN_DURATION_SECS,
};
#[cfg(not(target_arch = "wasm32"))]
use crate::utils::constants::game_constants::CONFIG_FILE;
use crate::utils::constants::game_constants::WINDOW_TITLE;
use crate::utils::game_state::Difficulty;

/// Errors from loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("`{field}` must be a positive number, got {value}")]
    Invalid { field: &'static str, value: f32 },
}

/// Tunables of the game. Every field is optional in the file.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub window_title: String,
    // Difficulty of the first round
    pub difficulty: Difficulty,
    // Fixed seed for a reproducible color sequence
    pub seed: Option<u64>,
    pub spin_step_rad: f32,
    pub shrink_duration_secs: f32,
    pub win_spin_duration_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            difficulty: Difficulty::default(),
            seed: None,
            spin_step_rad: SPIN_STEP_RAD,
            shrink_duration_secs: SHRINK_DURATION_SECS,
            win_spin_duration_secs: WIN_SPIN_DURATION_SECS,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`. A missing file is not an error and yields `None`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        Self::from_toml_str(&text).map(Some)
    }

    /// Configuration for this launch. Falls back to defaults on any problem.
    pub fn load_or_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            match Self::load(Path::new(CONFIG_FILE)) {
                Ok(Some(config)) => {
                    log!("Loaded configuration from {}", CONFIG_FILE);
                    config
                }
                Ok(None) => Self::default(),
                Err(e) => {
                    log!("Ignoring {}: {}", CONFIG_FILE, e);
                    Self::default()
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("spin_step_rad", self.spin_step_rad),
            ("shrink_duration_secs", self.shrink_duration_secs),
            ("win_spin_duration_secs", self.win_spin_duration_secs),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }
}
