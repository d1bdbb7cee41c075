//! Configuration file support for deskcalc.
//!
//! Settings are read from `~/.config/deskcalc/config.toml`. Every section is
//! optional; a missing file means defaults.
//!
//! # Example TOML
//! ```toml
//! [ui]
//! title = "Calculator"
//! show_key_hints = true
//! error_color = "red"
//!
//! [clipboard]
//! copy_on_equals = false
//!
//! [logging]
//! file = "/tmp/deskcalc.log"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const APP_DIR: &str = "deskcalc";

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Keypad appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title on the keypad border.
    pub title: String,
    /// Show the keyboard shortcuts under the keypad.
    pub show_key_hints: bool,
    /// Color of the error line.
    pub error_color: ErrorColor,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Calculator".to_string(),
            show_key_hints: true,
            error_color: ErrorColor::Red,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorColor {
    #[default]
    Red,
    Yellow,
    Magenta,
    White,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy the display after every successful `=`.
    pub copy_on_equals: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file used by the interactive keypad. Defaults to the state dir.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Repair values that would break rendering.
    fn validate(&mut self) {
        let title = self.ui.title.trim();
        if title.is_empty() {
            warn!("Empty ui.title, falling back to 'Calculator'");
            self.ui.title = UiConfig::default().title;
        } else if title.len() != self.ui.title.len() {
            self.ui.title = title.to_string();
        }

        if self.ui.title.contains('\n') {
            warn!("ui.title contains a newline, keeping the first line");
            let first = self.ui.title.lines().next().unwrap_or_default().to_string();
            self.ui.title = first;
        }
    }

    /// Returns `~/.config/deskcalc/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join(APP_DIR);

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Where the interactive keypad writes its log.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .clone()
            .or_else(|| dirs::state_dir().map(|dir| dir.join(APP_DIR).join("deskcalc.log")))
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("deskcalc.log")))
    }
}
