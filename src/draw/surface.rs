//! The drawing capability the renderer targets.
//!
//! [`Surface`] is the small set of primitives the table diagram needs. It is
//! implemented for [`cairo::Context`] to produce pixels and for
//! [`RecordingSurface`] to capture the primitive stream.

use super::color::Color;
use crate::util::Rect;

/// A point in canvas pixels.
pub type Point = (f64, f64);

/// Where and how an image is drawn: its top-left corner lands on
/// `(x, y)` after rotating about that corner by `rotation_degrees`
/// (clockwise, canvas y-down orientation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
}

impl Placement {
    pub fn new(x: i32, y: i32, rotation_degrees: f64) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
            rotation_degrees,
        }
    }
}

/// An image that can be drawn onto a surface.
#[derive(Debug)]
pub struct Image {
    name: String,
    surface: cairo::ImageSurface,
}

impl Image {
    pub fn new(name: impl Into<String>, surface: cairo::ImageSurface) -> Self {
        Self {
            name: name.into(),
            surface,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }
}

/// 2D drawing primitives used by the table renderer.
///
/// Implementations draw fire-and-forget: a primitive that fails to draw is
/// dropped, never reported.
pub trait Surface {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fills a full circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Strokes a straight line.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Strokes an arc swept clockwise from `start_degrees` to `end_degrees`.
    /// When `close` is set the chord back to the start is stroked too.
    #[allow(clippy::too_many_arguments)]
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_degrees: f64,
        end_degrees: f64,
        close: bool,
        color: Color,
        width: f64,
    );

    /// Draws an image at the given placement.
    fn draw_image(&mut self, image: &Image, placement: Placement);
}

impl Surface for cairo::Context {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.new_path();
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.rectangle(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
        let _ = self.fill();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.new_path();
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.arc(center.0, center.1, radius, 0.0, std::f64::consts::PI * 2.0);
        let _ = self.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.new_path();
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.set_line_width(width);
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        let _ = self.stroke();
    }

    #[allow(clippy::too_many_arguments)]
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_degrees: f64,
        end_degrees: f64,
        close: bool,
        color: Color,
        width: f64,
    ) {
        // Cairo sweeps towards increasing angles, which is clockwise on a y-down surface
        self.new_path();
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.set_line_width(width);
        self.arc(
            center.0,
            center.1,
            radius,
            start_degrees.to_radians(),
            end_degrees.to_radians(),
        );
        if close {
            self.close_path();
        }
        let _ = self.stroke();
    }

    fn draw_image(&mut self, image: &Image, placement: Placement) {
        if self.save().is_err() {
            return;
        }
        self.translate(placement.x, placement.y);
        self.rotate(placement.rotation_degrees.to_radians());
        if self.set_source_surface(image.surface(), 0.0, 0.0).is_ok() {
            let _ = self.paint();
        }
        let _ = self.restore();
    }
}

/// A primitive captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    StrokeArc {
        center: Point,
        radius: f64,
        start_degrees: f64,
        end_degrees: f64,
        close: bool,
        color: Color,
        width: f64,
    },
    DrawImage {
        name: String,
        placement: Placement,
    },
}

/// Surface that records primitives instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.primitives.push(Primitive::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.primitives.push(Primitive::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.primitives.push(Primitive::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_degrees: f64,
        end_degrees: f64,
        close: bool,
        color: Color,
        width: f64,
    ) {
        self.primitives.push(Primitive::StrokeArc {
            center,
            radius,
            start_degrees,
            end_degrees,
            close,
            color,
            width,
        });
    }

    fn draw_image(&mut self, image: &Image, placement: Placement) {
        self.primitives.push(Primitive::DrawImage {
            name: image.name().to_string(),
            placement,
        });
    }
}
