//! User configuration and preferences

use crate::error::{Result, SweepError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Fallback prompt suggestion when no previous target is recorded.
const DEFAULT_TARGET: &str = "node_modules";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// The target name from the last run, offered as the prompt placeholder
    pub last_target: Option<String>,
}

impl UserConfig {
    /// Get the config file path (~/.config/dirsweep/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirsweep").join("config.json"))
    }

    /// Load config from file, or create default if doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            SweepError::Config("Could not determine config directory".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| SweepError::Config(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SweepError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            SweepError::Config("Could not determine config directory".to_string())
        })?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SweepError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SweepError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, contents)
            .map_err(|e| SweepError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Target name to suggest in the prompt.
    pub fn suggested_target(&self) -> &str {
        self.last_target.as_deref().unwrap_or(DEFAULT_TARGET)
    }
}
