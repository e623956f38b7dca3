//! Table rendering on top of the [`Surface`] primitives.
//!
//! The base diagram is drawn in a fixed order: table layers, baulk line and
//! the D, spot markers, then pockets. Overlays (guides, balls) are additive
//! and drawn on request through [`super::OverlayState`].

use super::surface::{Image, Placement, Surface};
use crate::assets::PocketImages;
use crate::config::TableConfig;
use crate::layout::{self, BallColour};
use crate::util::{Rect, round_div};

/// Radius of the D drawn on the baulk line.
pub const D_RADIUS: f64 = 43.0;

/// Stroke width of the baulk line, the D and the helper guides.
pub const MARKING_LINE_WIDTH: f64 = 1.0;

/// Radius of a coloured ball.
pub const COLOUR_BALL_RADIUS: f64 = 5.0;

/// Radius of a red ball.
pub const RED_BALL_RADIUS: f64 = 4.0;

/// Half the width of the center pocket artwork.
pub const CENTER_POCKET_HALF_WIDTH: i32 = 15;

/// Draws the complete base diagram.
pub fn render_table<S: Surface + ?Sized>(
    surface: &mut S,
    config: &TableConfig,
    pockets: &PocketImages,
) {
    draw_table(surface, config);
    draw_baulk_line_and_d(surface, config);
    draw_dots(surface, config);
    draw_pockets(surface, config, pockets);
}

/// Draws the table layers: wooden edge, cushions, then the playing surface.
///
/// Each layer is inset from the previous one by that layer's rail size.
pub fn draw_table<S: Surface + ?Sized>(surface: &mut S, config: &TableConfig) {
    let Some(edge) = Rect::new(
        config.offset_x,
        config.offset_y,
        config.table_width,
        config.table_height,
    ) else {
        return;
    };
    surface.fill_rect(edge, config.edge_color());

    let Some(cushion) = edge.inset(config.edge_size) else {
        return;
    };
    surface.fill_rect(cushion, config.cushion_color());

    if let Some(playing_surface) = cushion.inset(config.cushion_size) {
        surface.fill_rect(playing_surface, config.table_color());
    }
}

/// Draws the baulk line across the playing surface and the D on it.
pub fn draw_baulk_line_and_d<S: Surface + ?Sized>(surface: &mut S, config: &TableConfig) {
    let pos = layout::compute_positions(config);
    let color = config.marking_color();
    let baulk_x = pos.baulk_x as f64;

    surface.stroke_line(
        (baulk_x, pos.top as f64),
        (baulk_x, pos.bottom as f64),
        color,
        MARKING_LINE_WIDTH,
    );

    // Left-facing semicircle, closed along the baulk line
    surface.stroke_arc(
        (baulk_x, pos.center_y as f64),
        D_RADIUS,
        90.0,
        270.0,
        true,
        color,
        MARKING_LINE_WIDTH,
    );
}

/// Draws the spot markers.
///
/// Every spot uses the translucent marking colour rather than its ball's
/// colour; the balls themselves come from [`draw_colours`].
pub fn draw_dots<S: Surface + ?Sized>(surface: &mut S, config: &TableConfig) {
    let color = config.marking_color();
    for dot in layout::compute_dot_positions(config) {
        surface.fill_circle(
            (dot.x as f64, dot.y as f64),
            config.marking_dot_size,
            color,
        );
    }
}

/// Draws the pocket artwork that loaded; a missing image is skipped.
///
/// The corner image is authored for the top-left corner and rotated into the
/// other three. The center image is authored for the top cushion and turned
/// half a revolution for the bottom one.
pub fn draw_pockets<S: Surface + ?Sized>(
    surface: &mut S,
    config: &TableConfig,
    pockets: &PocketImages,
) {
    if let Some(corner) = &pockets.corner {
        draw_corner_pockets(surface, config, corner);
    } else {
        log::debug!("Corner pocket image unavailable, skipping");
    }

    if let Some(center) = &pockets.center {
        draw_center_pockets(surface, config, center);
    } else {
        log::debug!("Center pocket image unavailable, skipping");
    }
}

fn draw_corner_pockets<S: Surface + ?Sized>(
    surface: &mut S,
    config: &TableConfig,
    image: &Image,
) {
    let left = config.offset_x;
    let top = config.offset_y;
    let right = config.offset_x + config.table_width;
    let bottom = config.offset_y + config.table_height;

    surface.draw_image(image, Placement::new(left, top, 0.0));
    surface.draw_image(image, Placement::new(right, top, 90.0));
    surface.draw_image(image, Placement::new(left, bottom, -90.0));
    surface.draw_image(image, Placement::new(right, bottom, 180.0));
}

fn draw_center_pockets<S: Surface + ?Sized>(
    surface: &mut S,
    config: &TableConfig,
    image: &Image,
) {
    let middle = config.offset_x + round_div(config.table_width, 2);
    let bottom = config.offset_y + config.table_height;

    surface.draw_image(
        image,
        Placement::new(middle - CENTER_POCKET_HALF_WIDTH, config.offset_y, 0.0),
    );
    surface.draw_image(
        image,
        Placement::new(middle + CENTER_POCKET_HALF_WIDTH, bottom, 180.0),
    );
}

/// Draws the six coloured balls on their spots, each in its own colour.
pub fn draw_colours<S: Surface + ?Sized>(surface: &mut S, config: &TableConfig) {
    for dot in layout::compute_dot_positions(config) {
        surface.fill_circle(
            (dot.x as f64, dot.y as f64),
            COLOUR_BALL_RADIUS,
            dot.name.color(),
        );
    }
}

/// Draws the fifteen reds racked behind the pink.
pub fn draw_reds<S: Surface + ?Sized>(surface: &mut S, config: &TableConfig) {
    let color = BallColour::Red.color();
    for (x, y) in layout::red_ball_positions(config) {
        surface.fill_circle((x as f64, y as f64), RED_BALL_RADIUS, color);
    }
}

/// Draws the diagnostic diagonals the spots should line up with.
///
/// Two lines join opposite corners of the playing surface; two more join the
/// middle of the top and bottom cushions to the opposite right-hand corner.
pub fn draw_helper_guides<S: Surface + ?Sized>(surface: &mut S, config: &TableConfig) {
    let pos = layout::compute_positions(config);
    let color = config.marking_color();
    let (left, top, right, bottom) = (
        pos.left as f64,
        pos.top as f64,
        pos.right as f64,
        pos.bottom as f64,
    );
    let center_x = pos.center_x as f64;

    let guides = [
        ((left, top), (right, bottom)),
        ((left, bottom), (right, top)),
        ((center_x, top), (right, bottom)),
        ((center_x, bottom), (right, top)),
    ];

    for (from, to) in guides {
        surface.stroke_line(from, to, color, MARKING_LINE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::{Primitive, RecordingSurface};
    use crate::draw::{Color, RED};

    fn blank_image(name: &str, width: i32, height: i32) -> Image {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        Image::new(name, surface)
    }

    fn filled_rects(recording: &RecordingSurface) -> Vec<Rect> {
        recording
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn table_layers_are_nested_and_ordered() {
        let config = TableConfig::default();
        let mut recording = RecordingSurface::new();
        draw_table(&mut recording, &config);

        let rects = filled_rects(&recording);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], Rect::new(20, 90, 600, 300).unwrap());
        assert_eq!(rects[1], Rect::new(30, 100, 580, 280).unwrap());
        assert_eq!(rects[2], Rect::new(40, 110, 560, 260).unwrap());
        assert!(rects[0].contains_rect(&rects[1]));
        assert!(rects[1].contains_rect(&rects[2]));

        let colors: Vec<Color> = recording
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![
                config.edge_color(),
                config.cushion_color(),
                config.table_color()
            ]
        );
    }

    #[test]
    fn baulk_line_and_d() {
        let config = TableConfig::default();
        let mut recording = RecordingSurface::new();
        draw_baulk_line_and_d(&mut recording, &config);

        let marking = config.marking_color();
        assert_eq!(
            recording.primitives(),
            &[
                Primitive::StrokeLine {
                    from: (156.0, 110.0),
                    to: (156.0, 370.0),
                    color: marking,
                    width: 1.0,
                },
                Primitive::StrokeArc {
                    center: (156.0, 240.0),
                    radius: 43.0,
                    start_degrees: 90.0,
                    end_degrees: 270.0,
                    close: true,
                    color: marking,
                    width: 1.0,
                },
            ]
        );
    }

    #[test]
    fn dots_use_marking_colour() {
        let config = TableConfig::default();
        let mut recording = RecordingSurface::new();
        draw_dots(&mut recording, &config);

        assert_eq!(recording.len(), 6);
        for primitive in recording.primitives() {
            match primitive {
                Primitive::FillCircle { radius, color, .. } => {
                    assert_eq!(*radius, 2.0);
                    assert_eq!(*color, config.marking_color());
                }
                other => panic!("unexpected primitive {other:?}"),
            }
        }
    }

    #[test]
    fn colours_use_ball_colours() {
        let config = TableConfig::default();
        let mut recording = RecordingSurface::new();
        draw_colours(&mut recording, &config);

        let expected: Vec<Primitive> = layout::compute_dot_positions(&config)
            .iter()
            .map(|dot| Primitive::FillCircle {
                center: (dot.x as f64, dot.y as f64),
                radius: 5.0,
                color: dot.name.color(),
            })
            .collect();
        assert_eq!(recording.primitives(), expected.as_slice());
    }

    #[test]
    fn reds_are_red_and_fifteen() {
        let config = TableConfig::default();
        let mut recording = RecordingSurface::new();
        draw_reds(&mut recording, &config);

        assert_eq!(recording.len(), 15);
        assert!(recording.primitives().iter().all(|p| matches!(
            p,
            Primitive::FillCircle { radius, color, .. } if *radius == 4.0 && *color == RED
        )));
    }

    #[test]
    fn guides_are_four_diagonals() {
        let config = TableConfig::default();
        let mut recording = RecordingSurface::new();
        draw_helper_guides(&mut recording, &config);

        let lines: Vec<_> = recording
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::StrokeLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                ((40.0, 110.0), (600.0, 370.0)),
                ((40.0, 370.0), (600.0, 110.0)),
                ((320.0, 110.0), (600.0, 370.0)),
                ((320.0, 370.0), (600.0, 110.0)),
            ]
        );
    }

    #[test]
    fn pockets_are_placed_at_corners_and_middles() {
        let config = TableConfig::default();
        let pockets = PocketImages {
            corner: Some(blank_image("corner", 30, 30)),
            center: Some(blank_image("center", 30, 20)),
        };
        let mut recording = RecordingSurface::new();
        draw_pockets(&mut recording, &config, &pockets);

        let placed: Vec<(String, (f64, f64, f64))> = recording
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::DrawImage { name, placement } => Some((
                    name.clone(),
                    (placement.x, placement.y, placement.rotation_degrees),
                )),
                _ => None,
            })
            .collect();

        assert_eq!(
            placed,
            vec![
                ("corner".to_string(), (20.0, 90.0, 0.0)),
                ("corner".to_string(), (620.0, 90.0, 90.0)),
                ("corner".to_string(), (20.0, 390.0, -90.0)),
                ("corner".to_string(), (620.0, 390.0, 180.0)),
                ("center".to_string(), (305.0, 90.0, 0.0)),
                ("center".to_string(), (335.0, 390.0, 180.0)),
            ]
        );
    }

    #[test]
    fn missing_pocket_images_are_skipped() {
        let config = TableConfig::default();
        let pockets = PocketImages {
            corner: None,
            center: Some(blank_image("center", 30, 20)),
        };
        let mut recording = RecordingSurface::new();
        draw_pockets(&mut recording, &config, &pockets);
        assert_eq!(recording.len(), 2);

        let mut recording = RecordingSurface::new();
        draw_pockets(&mut recording, &config, &PocketImages::default());
        assert!(recording.is_empty());
    }

    #[test]
    fn render_table_follows_fixed_order() {
        let config = TableConfig::default();
        let pockets = PocketImages {
            corner: Some(blank_image("corner", 30, 30)),
            center: None,
        };
        let mut recording = RecordingSurface::new();
        render_table(&mut recording, &config, &pockets);

        let kinds: Vec<&str> = recording
            .primitives()
            .iter()
            .map(|p| match p {
                Primitive::FillRect { .. } => "rect",
                Primitive::StrokeLine { .. } => "line",
                Primitive::StrokeArc { .. } => "arc",
                Primitive::FillCircle { .. } => "dot",
                Primitive::DrawImage { .. } => "pocket",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "rect", "rect", "rect", "line", "arc", "dot", "dot", "dot", "dot", "dot", "dot",
                "pocket", "pocket", "pocket", "pocket",
            ]
        );
    }
}
