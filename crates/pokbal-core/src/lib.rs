//! Core types shared across the pokbal crates.

mod color;
mod margins;
mod physics;
mod theme;

pub use color::Rgba;
pub use margins::{MarginStyle, Margins};
pub use physics::{DENSITY_MAX, MAX_EASE, MIN_SPACING, Physics};
pub use theme::{Theme, ThemePalette};
