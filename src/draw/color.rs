//! RGBA color type and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use snooker_table::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let marking = Color::new(1.0, 1.0, 1.0, 0.5);
/// assert_eq!(red.a, marking.a * 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Predefined Color Constants (CSS named colours)
// ============================================================================

/// CSS `red` (255, 0, 0)
pub const RED: Color = Color::from_rgb8(255, 0, 0);

/// CSS `green` (0, 128, 0)
pub const GREEN: Color = Color::from_rgb8(0, 128, 0);

/// CSS `blue` (0, 0, 255)
pub const BLUE: Color = Color::from_rgb8(0, 0, 255);

/// CSS `yellow` (255, 255, 0)
pub const YELLOW: Color = Color::from_rgb8(255, 255, 0);

/// CSS `brown` (165, 42, 42)
pub const BROWN: Color = Color::from_rgb8(165, 42, 42);

/// CSS `pink` (255, 192, 203)
pub const PINK: Color = Color::from_rgb8(255, 192, 203);

/// CSS `white` (255, 255, 255)
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);

/// CSS `black` (0, 0, 0)
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);

/// Fully transparent color
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
