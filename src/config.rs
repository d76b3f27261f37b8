//! Configuration management for the application.
//!
//! This module handles loading and saving the converter's defaults
//! in TOML format with platform-specific directory resolution. Every
//! setting can be overridden per run with a CLI flag.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Target EAGLE dialect.
///
/// The free dialect confines boards to a small positive-quadrant region, so
/// board scripts for it get an extra coordinate-translation pass. Any other
/// dialect takes the generated coordinates as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EagleVersion {
    /// Full EAGLE: board coordinates are used unmodified.
    #[default]
    Standard,
    /// Free EAGLE: board coordinates are shifted into the allowed area.
    Free,
}

/// Diode mounting style used for every key's row-isolation diode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DiodeType {
    /// Axial through-hole diode.
    #[default]
    ThroughHole,
    /// SOD-123 surface-mount diode.
    Smd,
}

impl DiodeType {
    /// Library device name added to the schematic for this diode style.
    #[must_use]
    pub const fn device(self) -> &'static str {
        match self {
            Self::ThroughHole => "1N4148",
            Self::Smd => "DIODE-SOD123",
        }
    }

    /// Whether board placement needs the surface-mount rotation.
    #[must_use]
    pub const fn is_smd(self) -> bool {
        matches!(self, Self::Smd)
    }
}

/// Per-key surface-mount LED population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LedMode {
    /// No in-switch LED.
    #[default]
    No,
    /// Single-color LED under every switch.
    Single,
    /// RGB LED under every switch.
    Rgb,
}

impl LedMode {
    /// Library device name for the per-key LED, if any.
    #[must_use]
    pub const fn device(self) -> Option<&'static str> {
        match self {
            Self::No => None,
            Self::Single => Some("LED3MM"),
            Self::Rgb => Some("RGBLED-5050"),
        }
    }
}

/// Converter configuration.
///
/// # File Location
///
/// - Linux: `~/.config/kle2eagle/config.toml`
/// - macOS: `~/Library/Application Support/kle2eagle/config.toml`
/// - Windows: `%APPDATA%\kle2eagle\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target EAGLE dialect.
    #[serde(default)]
    pub eagle_version: EagleVersion,
    /// Switch library base name footprints are derived from.
    #[serde(default = "default_switch_footprint")]
    pub switch_footprint: String,
    /// Diode mounting style.
    #[serde(default)]
    pub diode: DiodeType,
    /// Per-key LED population.
    #[serde(default)]
    pub led_mode: LedMode,
}

/// Default switch library base name.
fn default_switch_footprint() -> String {
    "KEYSW-MX".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eagle_version: EagleVersion::default(),
            switch_footprint: default_switch_footprint(),
            diode: DiodeType::default(),
            led_mode: LedMode::default(),
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("kle2eagle");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let config_path = Self::config_file_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}
