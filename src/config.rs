//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration for the TUI
///
/// Every field is optional; a missing file or missing key falls back to the
/// defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Highlight color for the focused field (named color, e.g. "cyan")
    pub accent_color: Option<String>,
    /// Show the shortcut help bar at the bottom
    pub show_help_bar: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file; a missing file yields the defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Accent color name with the default applied
    pub fn accent_color(&self) -> &str {
        self.accent_color.as_deref().unwrap_or("cyan")
    }

    /// Whether the help bar is shown (on unless disabled)
    pub fn show_help_bar(&self) -> bool {
        self.show_help_bar.unwrap_or(true)
    }
}
