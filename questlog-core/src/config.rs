//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/questlog/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/questlog/` (~/.config/questlog/)
//! - State/Logs: `$XDG_STATE_HOME/questlog/` (~/.local/state/questlog/)

use crate::activity::RenderOptions;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Activity sentence formatting
    #[serde(default)]
    pub format: FormatConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Activity sentence formatting
#[derive(Debug, Deserialize, Clone)]
pub struct FormatConfig {
    /// Characters of review/comment text shown before the ellipsis
    #[serde(default = "default_preview_max_chars")]
    pub preview_max_chars: usize,

    /// Marker appended to truncated previews
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Text between a sentence and its relative time
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            preview_max_chars: default_preview_max_chars(),
            ellipsis: default_ellipsis(),
            separator: default_separator(),
        }
    }
}

impl FormatConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.preview_max_chars == 0 {
            return Err(Error::Config(
                "format.preview_max_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Renderer options for this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            preview_max_chars: self.preview_max_chars,
            ellipsis: self.ellipsis.clone(),
            separator: self.separator.clone(),
        }
    }
}

fn default_preview_max_chars() -> usize {
    120
}

fn default_ellipsis() -> String {
    "...".to_string()
}

fn default_separator() -> String {
    " · ".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.format.validate()?;
        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/questlog/config.toml` (~/.config/questlog/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("questlog").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/questlog/` (~/.local/state/questlog/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("questlog")
    }
}
