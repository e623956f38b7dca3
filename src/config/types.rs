//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{BLACK, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas and table geometry plus the colours of each table layer.
///
/// Built once at startup and passed by reference to the layout and render
/// functions; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableConfig {
    /// Canvas width in pixels
    #[serde(default = "default_canvas_width")]
    pub canvas_width: i32,

    /// Canvas height in pixels
    #[serde(default = "default_canvas_height")]
    pub canvas_height: i32,

    /// Outer table width (edge included) in pixels
    #[serde(default = "default_table_width")]
    pub table_width: i32,

    /// Outer table height (edge included) in pixels
    #[serde(default = "default_table_height")]
    pub table_height: i32,

    /// Distance from the canvas left side to the table's outer edge
    #[serde(default = "default_offset_x")]
    pub offset_x: i32,

    /// Distance from the canvas top to the table's outer edge
    #[serde(default = "default_offset_y")]
    pub offset_y: i32,

    /// Width of the wooden edge
    #[serde(default = "default_edge_size")]
    pub edge_size: i32,

    /// Width of the cushion
    #[serde(default = "default_cushion_size")]
    pub cushion_size: i32,

    /// Radius of the spot markers
    #[serde(default = "default_marking_dot_size")]
    pub marking_dot_size: f64,

    /// Wooden edge colour
    #[serde(default = "default_edge_colour")]
    pub edge_colour: ColorSpec,

    /// Cushion colour
    #[serde(default = "default_cushion_colour")]
    pub cushion_colour: ColorSpec,

    /// Playing surface colour
    #[serde(default = "default_table_colour")]
    pub table_colour: ColorSpec,

    /// Colour of the baulk line, the D, the spots and the helper guides
    #[serde(default = "default_marking_colour")]
    pub marking_colour: ColorSpec,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            table_width: default_table_width(),
            table_height: default_table_height(),
            offset_x: default_offset_x(),
            offset_y: default_offset_y(),
            edge_size: default_edge_size(),
            cushion_size: default_cushion_size(),
            marking_dot_size: default_marking_dot_size(),
            edge_colour: default_edge_colour(),
            cushion_colour: default_cushion_colour(),
            table_colour: default_table_colour(),
            marking_colour: default_marking_colour(),
        }
    }
}

impl TableConfig {
    /// Combined width of edge and cushion on one side of the table.
    pub fn rail_size(&self) -> i32 {
        self.edge_size + self.cushion_size
    }

    pub fn edge_color(&self) -> Color {
        self.edge_colour.to_color_or(BLACK)
    }

    pub fn cushion_color(&self) -> Color {
        self.cushion_colour.to_color_or(BLACK)
    }

    pub fn table_color(&self) -> Color {
        self.table_colour.to_color_or(BLACK)
    }

    pub fn marking_color(&self) -> Color {
        self.marking_colour.to_color_or(BLACK)
    }
}

/// Where the pocket images are read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssetConfig {
    /// Directory containing the pocket images (relative paths resolve against
    /// the working directory)
    #[serde(default = "default_asset_directory")]
    pub directory: PathBuf,

    /// File name of the corner pocket image
    #[serde(default = "default_corner_pocket")]
    pub corner_pocket: String,

    /// File name of the center pocket image
    #[serde(default = "default_center_pocket")]
    pub center_pocket: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            directory: default_asset_directory(),
            corner_pocket: default_corner_pocket(),
            center_pocket: default_center_pocket(),
        }
    }
}

impl AssetConfig {
    pub fn corner_pocket_path(&self) -> PathBuf {
        self.directory.join(&self.corner_pocket)
    }

    pub fn center_pocket_path(&self) -> PathBuf {
        self.directory.join(&self.center_pocket)
    }
}

/// Output file settings used when no explicit `--output` path is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory the rendered PNG is written to
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// Filename template (chrono format specifiers, extension added automatically)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    640
}

fn default_canvas_height() -> i32 {
    480
}

fn default_table_width() -> i32 {
    600
}

fn default_table_height() -> i32 {
    300
}

fn default_offset_x() -> i32 {
    20
}

fn default_offset_y() -> i32 {
    90
}

fn default_edge_size() -> i32 {
    10
}

fn default_cushion_size() -> i32 {
    10
}

fn default_marking_dot_size() -> f64 {
    2.0
}

pub(crate) fn default_edge_colour() -> ColorSpec {
    ColorSpec::named("rgb(96, 71, 37)")
}

pub(crate) fn default_cushion_colour() -> ColorSpec {
    ColorSpec::named("rgb(94, 167, 62)")
}

pub(crate) fn default_table_colour() -> ColorSpec {
    ColorSpec::named("rgb(105, 187, 70)")
}

pub(crate) fn default_marking_colour() -> ColorSpec {
    ColorSpec::named("rgba(255,255,255,0.5)")
}

fn default_asset_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_corner_pocket() -> String {
    "corner-pocket.png".to_string()
}

fn default_center_pocket() -> String {
    "center-pocket.png".to_string()
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_filename_template() -> String {
    "snooker_%Y-%m-%d_%H%M%S".to_string()
}
