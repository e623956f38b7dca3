//! The raster canvas the diagram is drawn onto.
//!
//! [`Canvas`] plays the part of the page: it owns the Cairo image surface,
//! draws the base diagram once when created, and exposes the two one-shot
//! overlay triggers.

use crate::assets::PocketImages;
use crate::config::TableConfig;
use crate::draw::{OverlayState, render_table};
use std::io::Write;
use thiserror::Error;

/// Errors raised while creating or encoding the canvas.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),
}

/// A rendered snooker table diagram.
pub struct Canvas<'a> {
    config: &'a TableConfig,
    surface: cairo::ImageSurface,
    context: cairo::Context,
    overlays: OverlayState,
}

impl<'a> Canvas<'a> {
    /// Creates a canvas of the configured size and draws the base diagram on it.
    pub fn new(config: &'a TableConfig, pockets: &PocketImages) -> Result<Self, CanvasError> {
        if config.canvas_width <= 0 || config.canvas_height <= 0 {
            return Err(CanvasError::InvalidSize {
                width: config.canvas_width,
                height: config.canvas_height,
            });
        }

        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            config.canvas_width,
            config.canvas_height,
        )?;
        let mut context = cairo::Context::new(&surface)?;
        context.set_antialias(cairo::Antialias::Best);

        render_table(&mut context, config, pockets);
        log::debug!(
            "Rendered {}x{} table on {}x{} canvas",
            config.table_width,
            config.table_height,
            config.canvas_width,
            config.canvas_height
        );

        Ok(Self {
            config,
            surface,
            context,
            overlays: OverlayState::new(),
        })
    }

    /// Guides trigger: draws the helper guides once.
    pub fn show_guides(&mut self) -> bool {
        self.overlays.show_guides(&mut self.context, self.config)
    }

    /// Balls trigger: draws the colours and the reds once.
    pub fn show_balls(&mut self) -> bool {
        self.overlays.show_balls(&mut self.context, self.config)
    }

    pub fn overlays(&self) -> OverlayState {
        self.overlays
    }

    /// Finishes drawing and hands back the underlying image surface.
    pub fn into_surface(self) -> cairo::ImageSurface {
        let Canvas {
            surface, context, ..
        } = self;
        drop(context);
        surface.flush();
        surface
    }

    /// Encodes the canvas as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), CanvasError> {
        self.surface.flush();
        self.surface.write_to_png(writer)?;
        Ok(())
    }

    /// Encodes the canvas as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, CanvasError> {
        let mut bytes = Vec::new();
        self.write_png(&mut bytes)?;
        Ok(bytes)
    }
}
