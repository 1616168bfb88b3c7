//! Physics constants for the particle field.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the random per-particle density.
pub const DENSITY_MAX: f32 = 6.0;

/// Smallest grid spacing in pixels.
pub const MIN_SPACING: f32 = 1.0;

/// Upper bound (exclusive) of `ease`. At or above it the spring overshoots
/// further on every step for the stiffest particles.
pub const MAX_EASE: f32 = 2.0 / DENSITY_MAX;

/// Tunable coefficients of the particle step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Velocity multiplier applied every step, below 1.
    pub drag: f32,
    /// Scale of the spring pulling particles back to their origin.
    pub ease: f32,
    /// How far the target follows the pointer away from the canvas centre.
    pub mouse_factor: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            drag: 0.95,
            ease: 0.25,
            mouse_factor: 0.1,
        }
    }
}
