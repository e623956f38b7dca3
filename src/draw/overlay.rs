//! One-shot overlays drawn on top of the base diagram.

use super::render::{draw_colours, draw_helper_guides, draw_reds};
use super::surface::Surface;
use crate::config::TableConfig;

/// Tracks which overlays have already been drawn.
///
/// Overlays are additive, so each is drawn at most once; repeated triggers
/// leave the surface untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    guides_shown: bool,
    balls_shown: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guides_shown(&self) -> bool {
        self.guides_shown
    }

    pub fn balls_shown(&self) -> bool {
        self.balls_shown
    }

    /// Draws the helper guides the first time it is called.
    ///
    /// Returns `true` if anything was drawn.
    pub fn show_guides<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &TableConfig,
    ) -> bool {
        if self.guides_shown {
            log::debug!("Helper guides already shown");
            return false;
        }
        draw_helper_guides(surface, config);
        self.guides_shown = true;
        true
    }

    /// Draws the coloured balls and the red rack the first time it is called.
    ///
    /// Returns `true` if anything was drawn.
    pub fn show_balls<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        config: &TableConfig,
    ) -> bool {
        if self.balls_shown {
            log::debug!("Balls already shown");
            return false;
        }
        draw_colours(surface, config);
        draw_reds(surface, config);
        self.balls_shown = true;
        true
    }
}
