//! Runtime settings, read from ~/.arcade/config.json when present.
//!
//! Every field has a default, so the file may be partial or absent.

use crate::constants::FRAME_INTERVAL_MS;
use crate::games::SnakeConfig;
use crate::paths::config_path;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub snake: SnakeConfig,
    /// Host loop frame interval in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            snake: SnakeConfig::default(),
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl ArcadeConfig {
    pub fn is_valid(&self) -> bool {
        self.snake.is_valid() && self.frame_interval_ms > 0
    }

    /// Parse a config file. Missing file is an error of kind `NotFound`.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if !config.is_valid() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid settings in {}", path.display()),
            ));
        }
        Ok(config)
    }

    /// Load the user's config, or return defaults if missing or unusable.
    pub fn load() -> Self {
        let path = match config_path() {
            Ok(p) => p,
            Err(_) => return Self::default(),
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("using default config: {}", e);
                Self::default()
            }
        }
    }
}
