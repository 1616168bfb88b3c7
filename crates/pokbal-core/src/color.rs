//! RGBA pixel colour.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A 4-component colour, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    /// Opaque colour from its RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }

    /// Composite this colour over an opaque background.
    pub fn over(self, background: Rgba) -> Rgba {
        let [r, g, b, a] = self.0;
        match a {
            255 => self,
            0 => background,
            _ => {
                let mix = |fg: u8, bg: u8| {
                    ((fg as u16 * a as u16 + bg as u16 * (255 - a as u16)) / 255) as u8
                };
                Rgba([
                    mix(r, background.0[0]),
                    mix(g, background.0[1]),
                    mix(b, background.0[2]),
                    255,
                ])
            }
        }
    }

    /// Convert to a terminal colour, dropping alpha.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_extremes() {
        let bg = Rgba::rgb(10, 20, 30);
        assert_eq!(Rgba::WHITE.over(bg), Rgba::WHITE);
        assert_eq!(Rgba::TRANSPARENT.over(bg), bg);
    }

    #[test]
    fn test_over_half_alpha() {
        let half = Rgba([255, 255, 255, 128]);
        let blended = half.over(Rgba::BLACK);
        assert_eq!(blended, Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn test_to_color() {
        assert_eq!(Rgba::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
