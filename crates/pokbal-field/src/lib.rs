//! Particle explosion field for pokbal.
//!
//! A grid of particles is pushed away from a movable target and springs back
//! to its anchors. [`ParticleField`] holds the simulation state,
//! [`FrameLoop`] drives it one unit of work per host refresh and
//! [`PixelCanvas`] draws the resulting pixels into a terminal frame.

mod buffer;
mod field;
mod frame;
mod particle;
mod widget;

pub use buffer::PixelBuffer;
pub use field::{FieldError, ParticleField, axis_steps};
pub use frame::{FrameHandle, FrameLoop, FrameScheduler, FrameWork, Surface};
pub use particle::Particle;
pub use widget::{PixelCanvas, pixel_height};
