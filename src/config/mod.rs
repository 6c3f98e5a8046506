//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkpad/config.toml`. Settings cover the capture surface
//! dimensions and the pen used to render strokes.
//!
//! If no config file exists, sensible defaults are used automatically.

use crate::draw::{self, Color};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 200
/// height = 200
/// origin_x = 0.0
/// origin_y = 0.0
///
/// [pen]
/// color = "black"
/// thickness = 8.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Capture surface dimensions and page placement
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Pen appearance settings
    #[serde(default)]
    pub pen: PenConfig,
}

/// Capture surface settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Raster width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Raster height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Page-space x coordinate of the surface's top-left corner, used to
    /// normalize pointer events that arrive in page coordinates
    #[serde(default)]
    pub origin_x: f64,

    /// Page-space y coordinate of the surface's top-left corner
    #[serde(default)]
    pub origin_y: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

/// Pen appearance settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct PenConfig {
    /// Pen color name (black, white, red, blue)
    #[serde(default = "default_pen_color")]
    pub color: String,

    /// Stroke thickness in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_thickness")]
    pub thickness: f64,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            color: default_pen_color(),
            thickness: default_thickness(),
        }
    }
}

fn default_width() -> u32 {
    200
}

fn default_height() -> u32 {
    200
}

fn default_pen_color() -> String {
    "black".to_string()
}

fn default_thickness() -> f64 {
    8.0
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause rendering
    /// issues. Invalid values are clamped to the nearest valid value and a
    /// warning is logged.
    ///
    /// Validated ranges:
    /// - `surface.width` / `surface.height`: 16 - 4096
    /// - `pen.thickness`: 1.0 - 64.0
    /// - `pen.color`: must be a recognized color name
    fn validate_and_clamp(&mut self) {
        // Surface dimensions: 16 - 4096
        if !(16..=4096).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 16-4096 range",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(16, 4096);
        }
        if !(16..=4096).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 16-4096 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(16, 4096);
        }

        // Thickness: 1.0 - 64.0
        if !(1.0..=64.0).contains(&self.pen.thickness) {
            log::warn!(
                "Invalid pen thickness {:.1}, clamping to 1.0-64.0 range",
                self.pen.thickness
            );
            self.pen.thickness = self.pen.thickness.clamp(1.0, 64.0);
        }

        // Pen color must be a known name
        if Color::from_name(&self.pen.color).is_none() {
            log::warn!(
                "Unknown pen color '{}', falling back to 'black'",
                self.pen.color
            );
            self.pen.color = "black".to_string();
        }
    }

    /// Resolves the configured pen color name to a color value.
    pub fn pen_color(&self) -> Color {
        Color::from_name(&self.pen.color).unwrap_or(draw::BLACK)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the string is not valid TOML for the config schema.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str).context("Failed to parse config")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML syntax.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/inkpad/config.toml`.
    /// If the file doesn't exist, returns a Config with default values. All loaded values
    /// are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }
}
