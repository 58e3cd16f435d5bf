//! Configuration handling for the sign-up screen

use crate::domain::{LengthBound, PasswordPolicy, UsernamePolicy};
use crate::messages::Messages;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field} length bound: min {min}, max {max}")]
    InvalidBound {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// User configuration: validation policy and message overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SignUpConfig {
    pub username: UsernamePolicy,
    pub password: PasswordPolicy,
    pub messages: Messages,
}

impl SignUpConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory, defaulting when absent
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: SignUpConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds no input could satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bound("username", self.username.length())?;
        check_bound("password", self.password.length())?;
        Ok(())
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn check_bound(field: &'static str, bound: LengthBound) -> Result<(), ConfigError> {
    if bound.min == 0 || bound.min > bound.max {
        return Err(ConfigError::InvalidBound {
            field,
            min: bound.min,
            max: bound.max,
        });
    }
    Ok(())
}
