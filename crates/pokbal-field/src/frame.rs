//! Frame-driven animation loop and the host traits it runs on.

use crate::buffer::PixelBuffer;
use crate::field::ParticleField;

/// Opaque id of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Per-refresh scheduling primitive provided by the host.
pub trait FrameScheduler {
    /// Ask for one callback on the next refresh.
    fn request_frame(&mut self) -> FrameHandle;
    /// Drop a previously requested callback.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A 2D drawing surface provided by the host.
pub trait Surface {
    /// Current size in pixels.
    fn size(&self) -> (usize, usize);

    /// Allocate a pixel buffer for this surface.
    fn create_buffer(&self, width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::new(width, height)
    }

    /// Copy `buffer` onto the surface at the origin.
    fn blit(&mut self, buffer: &PixelBuffer);
}

/// Which unit of work a frame performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameWork {
    Advanced,
    Blitted,
}

/// Alternates physics steps and blits, one per refresh.
///
/// Positions are computed on every other frame and the image is pushed on
/// the frames in between, halving the cost of each refresh.
#[derive(Debug)]
pub struct FrameLoop {
    tic: bool,
    pending: Option<FrameHandle>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            tic: true,
            pending: None,
        }
    }

    /// Schedule the next frame unless one is already pending.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.pending.is_none() {
            self.pending = Some(scheduler.request_frame());
        }
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a fired frame and schedule the next one.
    pub fn on_frame(
        &mut self,
        field: &mut ParticleField,
        surface: &mut impl Surface,
        scheduler: &mut impl FrameScheduler,
    ) -> FrameWork {
        self.pending = None;
        self.tic = !self.tic;
        let work = if self.tic {
            field.advance();
            FrameWork::Advanced
        } else {
            let mut buffer = surface.create_buffer(field.width(), field.height());
            field.rasterize_into(&mut buffer);
            surface.blit(&buffer);
            FrameWork::Blitted
        };
        self.pending = Some(scheduler.request_frame());
        work
    }
}
