//! RGBA pixel buffer.

use pokbal_core::Rgba;

/// Row-major RGBA image, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Reallocate if the dimensions differ, then clear.
    pub fn reset(&mut self, width: usize, height: usize) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height);
        } else {
            self.clear();
        }
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (x + y * self.width) * 4)
    }

    /// Read the pixel at `(x, y)`, `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        let n = self.offset(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[n..n + 4]);
        Some(Rgba(px))
    }

    /// Write the pixel at `(x, y)`. Returns false when out of bounds.
    pub fn put(&mut self, x: usize, y: usize, color: Rgba) -> bool {
        match self.offset(x, y) {
            Some(n) => {
                self.data[n..n + 4].copy_from_slice(&color.0);
                true
            }
            None => false,
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn lit_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.data().len(), 4 * 3 * 4);
        assert_eq!(buf.lit_pixels(), 0);
    }

    #[test]
    fn test_put_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2);
        assert!(!buf.put(2, 0, Rgba::WHITE));
        assert!(!buf.put(0, 2, Rgba::WHITE));
        assert!(buf.put(1, 1, Rgba::WHITE));
        assert_eq!(buf.get(1, 1), Some(Rgba::WHITE));
        assert_eq!(&buf.data()[12..16], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_reset_reallocates() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.put(0, 0, Rgba::WHITE);
        buf.reset(2, 2);
        assert_eq!(buf.lit_pixels(), 0);
        buf.reset(3, 1);
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.data().len(), 12);
    }
}
