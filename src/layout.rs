//! Table geometry derived from a [`TableConfig`].
//!
//! Everything here is a pure function of the configuration: the playing
//! surface bounds, the baulk line, the six colour spots and the red rack.

use crate::config::TableConfig;
use crate::draw::{BLACK, BLUE, BROWN, Color, GREEN, PINK, RED, YELLOW};
use crate::util::{Rect, round_div};
use serde::Serialize;

/// Gap between neighbouring reds, and between the pink and the rack apex.
pub const RED_SPACING: i32 = 10;

/// Derived playing-surface geometry, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Positions {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
    pub center_x: i32,
    pub center_y: i32,
    pub baulk_x: i32,
    pub internal_width: i32,
    pub internal_height: i32,
}

impl Positions {
    /// The playing surface inside the cushions.
    pub fn playing_surface(&self) -> Option<Rect> {
        Rect::from_min_max(self.left, self.top, self.right, self.bottom)
    }
}

/// The six coloured balls, in the order their spots are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColour {
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
    Red,
}

impl BallColour {
    /// Lowercase identifier, as used for the spot names.
    pub fn name(self) -> &'static str {
        match self {
            BallColour::Yellow => "yellow",
            BallColour::Green => "green",
            BallColour::Brown => "brown",
            BallColour::Blue => "blue",
            BallColour::Pink => "pink",
            BallColour::Black => "black",
            BallColour::Red => "red",
        }
    }

    /// Fill colour of the ball.
    pub fn color(self) -> Color {
        match self {
            BallColour::Yellow => YELLOW,
            BallColour::Green => GREEN,
            BallColour::Brown => BROWN,
            BallColour::Blue => BLUE,
            BallColour::Pink => PINK,
            BallColour::Black => BLACK,
            BallColour::Red => RED,
        }
    }
}

/// A named colour spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DotPosition {
    pub name: BallColour,
    pub x: i32,
    pub y: i32,
}

/// One row of the red rack, counted from the apex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RedRow {
    pub ball_count: u32,
}

const RED_ROWS: [RedRow; 5] = [
    RedRow { ball_count: 1 },
    RedRow { ball_count: 2 },
    RedRow { ball_count: 3 },
    RedRow { ball_count: 4 },
    RedRow { ball_count: 5 },
];

/// Computes the playing-surface bounds, center and baulk line.
pub fn compute_positions(config: &TableConfig) -> Positions {
    let rail = config.rail_size();
    let left = config.offset_x + rail;
    let top = config.offset_y + rail;

    Positions {
        top,
        right: config.offset_x + config.table_width - rail,
        bottom: config.offset_y + config.table_height - rail,
        left,
        center_x: config.offset_x + config.table_width / 2,
        center_y: config.offset_y + config.table_height / 2,
        baulk_x: left + round_div(config.table_width - rail, 5),
        internal_width: config.table_width - rail * 2,
        internal_height: config.table_height - rail * 2,
    }
}

/// Computes the six colour spots: yellow, green, brown, blue, pink, black.
///
/// Yellow, brown and green sit on the baulk line (yellow nearest the bottom
/// cushion) and blue on the center spot. Pink and black sit a quarter and an
/// eleventh of the surface length in from the right cushion.
pub fn compute_dot_positions(config: &TableConfig) -> [DotPosition; 6] {
    let p = compute_positions(config);
    let third_height = round_div(p.internal_height, 3);

    [
        DotPosition {
            name: BallColour::Yellow,
            x: p.baulk_x,
            y: p.bottom - third_height,
        },
        DotPosition {
            name: BallColour::Green,
            x: p.baulk_x,
            y: p.top + third_height,
        },
        DotPosition {
            name: BallColour::Brown,
            x: p.baulk_x,
            y: p.center_y,
        },
        DotPosition {
            name: BallColour::Blue,
            x: p.center_x,
            y: p.center_y,
        },
        DotPosition {
            name: BallColour::Pink,
            x: p.right - round_div(p.internal_width, 4),
            y: p.center_y,
        },
        DotPosition {
            name: BallColour::Black,
            x: p.right - round_div(p.internal_width, 11),
            y: p.center_y,
        },
    ]
}

/// The red rack: five rows of 1 to 5 balls.
pub fn compute_red_rows() -> [RedRow; 5] {
    RED_ROWS
}

/// Centers of the fifteen reds, racked behind the pink with the apex nearest it.
///
/// Row `i` sits `RED_SPACING * (i + 1)` right of the pink and is shifted up by
/// half a spacing per row so the triangle stays centered on the pink's line.
pub fn red_ball_positions(config: &TableConfig) -> Vec<(i32, i32)> {
    let [_, _, _, _, pink, _] = compute_dot_positions(config);
    let half = RED_SPACING / 2;

    compute_red_rows()
        .iter()
        .enumerate()
        .flat_map(|(row, red_row)| {
            let row = row as i32;
            (0..red_row.ball_count as i32).map(move |ball| {
                (
                    pink.x + RED_SPACING + row * RED_SPACING,
                    pink.y + ball * RED_SPACING - half * row,
                )
            })
        })
        .collect()
}

/// Everything the layout engine derives, as one serializable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub positions: Positions,
    pub dots: [DotPosition; 6],
    pub red_rows: [RedRow; 5],
    pub reds: Vec<(i32, i32)>,
}

impl LayoutReport {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            positions: compute_positions(config),
            dots: compute_dot_positions(config),
            red_rows: compute_red_rows(),
            reds: red_ball_positions(config),
        }
    }
}
