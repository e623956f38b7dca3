//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a name, CSS functional notation, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// marking_colour = "white"
///
/// # CSS functional notation (alpha 0.0-1.0)
/// marking_colour = "rgba(255,255,255,0.5)"
///
/// # Custom RGB color (0-255 per component)
/// edge_colour = [96, 71, 37]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, brown, pink, white, black)
    /// or `rgb(r, g, b)` / `rgba(r, g, b, a)`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Builds a named/functional specification from a string slice.
    pub fn named(spec: &str) -> Self {
        ColorSpec::Name(spec.to_string())
    }

    /// Returns true if the specification resolves to a colour.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings are parsed with `util::parse_color()`. Unparseable strings fall
    /// back to `fallback` with a warning. RGB arrays are converted from 0-255
    /// range to 0.0-1.0 range with full opacity.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown colour '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
