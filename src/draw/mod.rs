//! Rendering primitives and the snooker table renderer (Cairo-based).
//!
//! This module defines the drawing types used for the table diagram:
//! - [`Color`]: RGBA color representation with CSS named colour constants
//! - [`Surface`]: the drawing capability, implemented for Cairo and for recording
//! - Rendering functions for the table, markings, pockets and overlays
//! - [`OverlayState`]: one-shot guard for the guides and balls overlays

pub mod color;
pub mod overlay;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use overlay::OverlayState;
pub use render::{
    draw_baulk_line_and_d, draw_colours, draw_dots, draw_helper_guides, draw_pockets, draw_reds,
    draw_table, render_table,
};
pub use surface::{Image, Placement, Primitive, RecordingSurface, Surface};

pub use color::{BLACK, BLUE, BROWN, GREEN, PINK, RED, TRANSPARENT, WHITE, YELLOW};
