//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::behavior::ThemeMode;
use crate::constants::APP_DIR_NAME;

/// Theme the page starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the OS dark/light setting
    Auto,
    /// Always start dark
    #[default]
    Dark,
    /// Always start light
    Light,
}

impl ThemePreference {
    /// Resolves the preference to a concrete start mode.
    ///
    /// `Auto` uses the `dark-light` crate and falls back to dark when the
    /// OS setting is unavailable.
    #[must_use]
    pub fn resolve(self) -> ThemeMode {
        match self {
            Self::Dark => ThemeMode::Dark,
            Self::Light => ThemeMode::Light,
            Self::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => ThemeMode::Light,
                Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => {
                    ThemeMode::Dark
                }
            },
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Portfolio TOML shown when no file is given on the command line
    #[serde(default)]
    pub content: Option<PathBuf>,
    /// Log file (defaults to `termfolio.log` in the config directory)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start theme
    #[serde(default)]
    pub theme: ThemePreference,
    /// Open the help overlay on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
    /// Milliseconds between frames
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

/// Default frame interval (~30 fps)
const fn default_frame_ms() -> u64 {
    33
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            show_help_on_startup: false,
            frame_ms: default_frame_ms(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/termfolio/config.toml`
/// - macOS: `~/Library/Application Support/termfolio/config.toml`
/// - Windows: `%APPDATA%\termfolio\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `frame_ms` is between 8 and 1000
    /// - the content path exists (if set)
    pub fn validate(&self) -> Result<()> {
        if !(8..=1000).contains(&self.ui.frame_ms) {
            anyhow::bail!(
                "ui.frame_ms must be between 8 and 1000, got {}",
                self.ui.frame_ms
            );
        }

        if let Some(content) = &self.paths.content {
            if !content.exists() {
                anyhow::bail!("Portfolio file does not exist: {}", content.display());
            }
        }

        Ok(())
    }

    /// Resolves the log file location.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.paths.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("termfolio.log")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.content, None);
        assert_eq!(config.ui.theme, ThemePreference::Dark);
        assert_eq!(config.ui.frame_ms, 33);
        assert!(!config.ui.show_help_on_startup);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.ui.theme = ThemePreference::Light;
        config.ui.frame_ms = 50;
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme = \"light\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.theme, ThemePreference::Light);
        assert_eq!(config.ui.frame_ms, 33);
    }

    #[test]
    fn test_theme_preference_written_lowercase() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::new();
        config.ui.theme = ThemePreference::Auto;
        config.save_to(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("theme = \"auto\""), "got: {text}");
        fs::write(&path, "[ui]\ntheme = \"Dark\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_frame_rate_rejected() {
        let mut config = Config::new();
        config.ui.frame_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_content_path_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new();
        config.paths.content = Some(dir.path().join("nope.toml"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_preferences_resolve() {
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
        // Auto depends on the OS; it must still produce a mode
        let _ = ThemePreference::Auto.resolve();
    }
}
