//! Snooker table diagram renderer.
//!
//! Computes the table geometry from a [`Config`], draws the table, its
//! markings and pockets onto a 2D surface, and adds the helper guides and the
//! ball layout as one-shot overlays. The `snooker-table` binary writes the
//! result as a PNG.

pub mod assets;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod layout;
pub mod output;
pub mod util;

pub use canvas::Canvas;
pub use config::Config;
