//! Terminal rendering of a pixel buffer.

use pokbal_core::Rgba;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::buffer::PixelBuffer;

/// Glyph showing the upper pixel as foreground and the lower as background.
const UPPER_HALF: &str = "▀";

/// Draws a [`PixelBuffer`] with two vertical pixels per terminal cell.
#[derive(Debug, Clone, Copy)]
pub struct PixelCanvas<'a> {
    pixels: &'a PixelBuffer,
    background: Rgba,
}

impl<'a> PixelCanvas<'a> {
    pub fn new(pixels: &'a PixelBuffer, background: Rgba) -> Self {
        Self { pixels, background }
    }

    /// Colour at pixel `(x, y)` composited over the background.
    fn shade(&self, x: usize, y: usize) -> Rgba {
        self.pixels
            .get(x, y)
            .map_or(self.background, |px| px.over(self.background))
    }
}

/// Pixel height of a canvas covering `rows` terminal rows.
pub fn pixel_height(rows: u16) -> usize {
    rows as usize * 2
}

impl Widget for PixelCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as usize;
                let y = row as usize * 2;
                let upper = self.shade(x, y);
                let lower = self.shade(x, y + 1);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF)
                        .set_fg(upper.to_color())
                        .set_bg(lower.to_color());
                }
            }
        }
    }
}
