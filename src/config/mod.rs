//! Configuration file support for snooker-table.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/snooker-table/config.toml`. Settings include the table geometry
//! and colours, the pocket image location, and the output file naming.
//!
//! If no config file exists, the classic 640x480 diagram defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{AssetConfig, OutputConfig, TableConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest playing surface (inside the cushions) accepted in either direction.
const MIN_PLAYING_SURFACE: i32 = 2;

/// Largest accepted canvas/table dimension, offset or rail size, in pixels.
///
/// Keeps every derived coordinate well inside `i32`.
pub const MAX_DIMENSION: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [table]
/// table_width = 600
/// table_height = 300
/// edge_colour = "rgb(96, 71, 37)"
///
/// [assets]
/// directory = "assets"
///
/// [output]
/// filename_template = "snooker_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas and table geometry and colours
    #[serde(default)]
    pub table: TableConfig,

    /// Pocket image location
    #[serde(default)]
    pub assets: AssetConfig,

    /// Output file naming
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - canvas and table dimensions: 1 - `MAX_DIMENSION`
    /// - offsets, edge and cushion sizes: 0 - `MAX_DIMENSION`
    /// - table dimensions leave a playing surface of at least 2px each way
    /// - `marking_dot_size`: 0.5 - 20.0
    /// - colours must parse; unknown ones fall back to the defaults
    pub fn validate_and_clamp(&mut self) {
        let table = &mut self.table;

        for (name, value) in [
            ("canvas_width", &mut table.canvas_width),
            ("canvas_height", &mut table.canvas_height),
            ("table_width", &mut table.table_width),
            ("table_height", &mut table.table_height),
        ] {
            if !(1..=MAX_DIMENSION).contains(value) {
                warn!(
                    "Invalid {} {}, clamping to 1-{} range",
                    name, value, MAX_DIMENSION
                );
                *value = (*value).clamp(1, MAX_DIMENSION);
            }
        }

        for (name, value) in [
            ("offset_x", &mut table.offset_x),
            ("offset_y", &mut table.offset_y),
            ("edge_size", &mut table.edge_size),
            ("cushion_size", &mut table.cushion_size),
        ] {
            if !(0..=MAX_DIMENSION).contains(value) {
                warn!(
                    "Invalid {} {}, clamping to 0-{} range",
                    name, value, MAX_DIMENSION
                );
                *value = (*value).clamp(0, MAX_DIMENSION);
            }
        }

        // Edge and cushion must leave room for a playing surface
        let min_outer = table.rail_size() * 2 + MIN_PLAYING_SURFACE;
        if table.table_width < min_outer {
            warn!(
                "table_width {} leaves no playing surface, raising to {}",
                table.table_width, min_outer
            );
            table.table_width = min_outer;
        }
        if table.table_height < min_outer {
            warn!(
                "table_height {} leaves no playing surface, raising to {}",
                table.table_height, min_outer
            );
            table.table_height = min_outer;
        }

        if !(0.5..=20.0).contains(&table.marking_dot_size) {
            warn!(
                "Invalid marking_dot_size {:.1}, clamping to 0.5-20.0 range",
                table.marking_dot_size
            );
            table.marking_dot_size = table.marking_dot_size.clamp(0.5, 20.0);
        }

        for (name, spec, fallback) in [
            (
                "edge_colour",
                &mut table.edge_colour,
                types::default_edge_colour(),
            ),
            (
                "cushion_colour",
                &mut table.cushion_colour,
                types::default_cushion_colour(),
            ),
            (
                "table_colour",
                &mut table.table_colour,
                types::default_table_colour(),
            ),
            (
                "marking_colour",
                &mut table.marking_colour,
                types::default_marking_colour(),
            ),
        ] {
            if !spec.is_valid() {
                warn!("Invalid {} {:?}, falling back to {:?}", name, spec, fallback);
                *spec = fallback;
            }
        }

        if table.offset_x + table.table_width > table.canvas_width
            || table.offset_y + table.table_height > table.canvas_height
        {
            warn!(
                "Table ({}x{} at {},{}) extends past the {}x{} canvas and will be cropped",
                table.table_width,
                table.table_height,
                table.offset_x,
                table.offset_y,
                table.canvas_width,
                table.canvas_height
            );
        }

        if self.output.filename_template.trim().is_empty() {
            warn!("Empty output filename_template, falling back to default");
            self.output.filename_template = OutputConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/snooker-table/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("snooker-table");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");
