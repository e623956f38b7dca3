//! Utility functions for colours, rounding and rectangle geometry.
//!
//! This module provides:
//! - Colour name and CSS functional notation parsing
//! - Half-up integer rounding used by the layout engine
//! - An axis-aligned integer rectangle

use crate::draw::{Color, color::*};

// ============================================================================
// Colour Parsing
// ============================================================================

/// Maps colour name strings to Color values.
///
/// Used by the configuration system to parse colour names from the config file.
/// Names follow the CSS named colours so that a table configured with the same
/// strings a browser would accept renders identically.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "brown", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "brown" => Some(BROWN),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Parses a colour written as a name, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// RGB components are 0-255, alpha is 0.0-1.0. Out of range components are
/// rejected rather than clamped.
///
/// # Returns
/// - `Some(Color)` if the string is a known name or well-formed functional notation
/// - `None` otherwise
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    if let Some(color) = name_to_color(spec) {
        return Some(color);
    }

    let lower = spec.to_lowercase();
    let (args, has_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |s: &str| -> Option<f64> {
        let value: u8 = s.parse().ok()?;
        Some(value as f64 / 255.0)
    };

    let a = if has_alpha {
        let alpha: f64 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        alpha
    } else {
        1.0
    };

    Some(Color {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
    })
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Divides and rounds halves towards positive infinity.
///
/// All table measurements are positive integers, so this matches rounding the
/// exact quotient to the nearest pixel.
pub fn round_div(numerator: i32, denominator: i32) -> i32 {
    (numerator as f64 / denominator as f64 + 0.5).floor() as i32
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns a copy shrunk by `amount` on every side, or `None` when nothing is left.
    pub fn inset(&self, amount: i32) -> Option<Self> {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2,
            self.height - amount * 2,
        )
    }

    /// Returns true if `other` lies entirely within this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}
