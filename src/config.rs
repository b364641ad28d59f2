//! User preferences for the command line front end
//!
//! Read from `config.toml` in the platform config directory. Every field is
//! optional; a missing file behaves like an empty one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// User configuration, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the flashcard book is stored (defaults to the data directory)
    pub data_file: Option<PathBuf>,
    /// Use ANSI colors when stdout is a terminal
    pub color: bool,
    /// Show answers when listing cards in browse mode
    pub reveal_answers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            color: true,
            reveal_answers: true,
        }
    }
}

impl Config {
    /// Default config location (e.g., ~/.config/flashbook/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flashbook").join("config.toml"))
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}
