//! Rules configuration loaded from TOML.
//!
//! The file is optional. A missing file yields [`RulesConfig::default`]; every
//! key inside it is optional too.
//!
//! ```toml
//! double_step_expiry = "persist"
//! enforce_turn_order = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How long a pawn's double-step flag stays set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleStepExpiry {
    /// The flag stays until that pawn moves again.
    Persist,
    /// The flags of a side's pawns are cleared when that side moves next,
    /// so en passant is only available on the immediately following turn.
    #[default]
    NextTurn,
}

/// Rule switches for a [`Position`](crate::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Lifetime of the double-step flag. Defaults to `next_turn`.
    #[serde(default)]
    pub double_step_expiry: DoubleStepExpiry,
    /// Reject moves of the side not to move. Defaults to true.
    #[serde(default = "default_enforce_turn_order")]
    pub enforce_turn_order: bool,
}

fn default_enforce_turn_order() -> bool {
    true
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            double_step_expiry: DoubleStepExpiry::default(),
            enforce_turn_order: default_enforce_turn_order(),
        }
    }
}

impl RulesConfig {
    /// Loads the configuration from `path`, or the default if the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration path, `rules.toml` in the current
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("rules.toml")
    }
}
