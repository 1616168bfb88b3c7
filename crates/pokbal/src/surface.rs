//! The terminal as a pixel surface.

use pokbal_field::{PixelBuffer, Surface, pixel_height};

/// Holds the last blitted image until the next terminal draw.
#[derive(Debug)]
pub struct TerminalSurface {
    pixels: PixelBuffer,
    width: usize,
    height: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            pixels: PixelBuffer::new(0, 0),
            width: 0,
            height: 0,
        }
    }

    /// Match the surface to a canvas of `cols` by `rows` terminal cells.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols as usize;
        self.height = pixel_height(rows);
        self.pixels = PixelBuffer::new(self.width, self.height);
    }

    /// The image to draw.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn blit(&mut self, buffer: &PixelBuffer) {
        self.pixels.clone_from(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokbal_core::Rgba;

    #[test]
    fn test_resize_doubles_rows() {
        let mut surface = TerminalSurface::new();
        surface.resize(80, 23);
        assert_eq!(surface.size(), (80, 46));
        assert_eq!(surface.pixels().lit_pixels(), 0);
    }

    #[test]
    fn test_blit_replaces_image() {
        let mut surface = TerminalSurface::new();
        surface.resize(4, 2);
        let mut buffer = surface.create_buffer(4, 4);
        buffer.put(3, 3, Rgba::WHITE);
        surface.blit(&buffer);
        assert_eq!(surface.pixels().get(3, 3), Some(Rgba::WHITE));
    }
}
