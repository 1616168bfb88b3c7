//! The particle field: grid population, physics step and rasterization.

use std::fmt;

use pokbal_core::{DENSITY_MAX, MIN_SPACING, Margins, Physics, Rgba};
use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::particle::Particle;

/// Errors raised while populating the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    /// Spacing must be finite and at least [`MIN_SPACING`].
    InvalidSpacing(f32),
    /// The grid would hold more particles than can be addressed.
    GridTooLarge { columns: usize, rows: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing(spacing) => {
                write!(f, "particle spacing must be at least {MIN_SPACING}, got {spacing}")
            }
            Self::GridTooLarge { columns, rows } => {
                write!(f, "particle grid of {columns}x{rows} is too large")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Number of grid samples `start + k * spacing` that lie in `[start, end)`.
pub fn axis_steps(start: f32, end: f32, spacing: f32) -> usize {
    if end <= start {
        return 0;
    }
    ((end - start) / spacing).ceil() as usize
}

/// A field of particles exploding away from a movable target.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: usize,
    height: usize,
    /// Squared-distance threshold, also the force numerator.
    explosion_diameter: f32,
    target: (f32, f32),
    color: Rgba,
    physics: Physics,
}

impl ParticleField {
    /// Create an empty field drawing in `color`.
    pub fn new(color: Rgba, physics: Physics) -> Self {
        Self {
            particles: Vec::new(),
            width: 0,
            height: 0,
            explosion_diameter: 0.0,
            target: (0.0, 0.0),
            color,
            physics,
        }
    }

    /// Repopulate the grid for a canvas of `size` pixels.
    ///
    /// Returns the number of particles created.
    pub fn initialize(
        &mut self,
        size: (usize, usize),
        spacing: f32,
        margins: Margins,
    ) -> Result<usize, FieldError> {
        self.initialize_with_rng(size, spacing, margins, &mut rand::thread_rng())
    }

    /// Like [`ParticleField::initialize`] with an explicit random source for densities.
    pub fn initialize_with_rng<R: Rng>(
        &mut self,
        size: (usize, usize),
        spacing: f32,
        margins: Margins,
        rng: &mut R,
    ) -> Result<usize, FieldError> {
        if !(spacing.is_finite() && spacing >= MIN_SPACING) {
            return Err(FieldError::InvalidSpacing(spacing));
        }

        let (width, height) = size;
        let x_start = margins.left;
        let y_start = margins.top;
        let columns = axis_steps(x_start, width as f32 - margins.right, spacing);
        let rows = axis_steps(y_start, height as f32 - margins.bottom, spacing);
        let count = columns
            .checked_mul(rows)
            .ok_or(FieldError::GridTooLarge { columns, rows })?;

        self.width = width;
        self.height = height;
        self.explosion_diameter = width as f32 * width as f32;
        self.particles.clear();
        self.pointer_left();

        self.particles.reserve(count);
        for i in 0..columns {
            let x = x_start + i as f32 * spacing;
            for j in 0..rows {
                let y = y_start + j as f32 * spacing;
                let density = rng.gen_range(0.0..DENSITY_MAX);
                self.particles.push(Particle::at_rest(x, y, density));
            }
        }

        Ok(self.particles.len())
    }

    /// Move the explosion origin to canvas coordinates `(x, y)`.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = (x, y);
    }

    /// Point the explosion at a pointer position given in canvas coordinates.
    ///
    /// The target only follows the pointer partially, pulled towards the
    /// canvas centre by the mouse factor.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let cx = self.width as f32 / 2.0;
        let cy = self.height as f32 / 2.0;
        let factor = self.physics.mouse_factor;
        self.set_target(cx + factor * (x - cx), cy + factor * (y - cy));
    }

    /// Park the target off-canvas so no particle feels it.
    pub fn pointer_left(&mut self) {
        self.target = (-(self.width as f32), -(self.height as f32));
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Run one physics step for every particle.
    pub fn advance(&mut self) {
        let target = self.target;
        let diameter = self.explosion_diameter;
        let physics = self.physics;
        for particle in &mut self.particles {
            particle.step(target, diameter, &physics);
        }
    }

    /// Draw the particles into a fresh buffer the size of the canvas.
    pub fn rasterize(&self) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(self.width, self.height);
        self.draw(&mut buffer);
        buffer
    }

    /// Draw the particles into `buffer`, resizing it to the canvas first.
    pub fn rasterize_into(&self, buffer: &mut PixelBuffer) {
        buffer.reset(self.width, self.height);
        self.draw(buffer);
    }

    fn draw(&self, buffer: &mut PixelBuffer) {
        // Off-canvas particles are skipped; later particles overwrite earlier ones.
        for (x, y) in self.particles.iter().filter_map(Particle::pixel) {
            buffer.put(x, y, self.color);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn target(&self) -> (f32, f32) {
        self.target
    }

    pub fn explosion_diameter(&self) -> f32 {
        self.explosion_diameter
    }

    pub fn color(&self) -> Rgba {
        self.color
    }
}
