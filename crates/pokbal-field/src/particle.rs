//! A single point mass anchored to its grid position.

use pokbal_core::Physics;

/// State for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Grid anchor the particle springs back to.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Current position.
    pub x: f32,
    pub y: f32,
    /// Current velocity.
    pub vx: f32,
    pub vy: f32,
    /// Spring stiffness multiplier, fixed at creation.
    pub density: f32,
}

impl Particle {
    /// A particle at rest on its origin.
    pub fn at_rest(x: f32, y: f32, density: f32) -> Self {
        Self {
            origin_x: x,
            origin_y: y,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            density,
        }
    }

    /// Advance one step away from `target`.
    ///
    /// Inside the explosion threshold the particle receives an impulse of
    /// magnitude `explosion_diameter / distance²` pointing away from the
    /// target. The impulse is added to the undamped velocity; drag and the
    /// spring towards the origin are applied afterwards.
    pub fn step(&mut self, target: (f32, f32), explosion_diameter: f32, physics: &Physics) {
        let dx = target.0 - self.x;
        let dy = target.1 - self.y;
        let distance_sq = dx * dx + dy * dy;

        // A particle sitting exactly on the target has no direction to fly in.
        if distance_sq < explosion_diameter && distance_sq > 0.0 {
            let force = -explosion_diameter / distance_sq;
            let angle = dy.atan2(dx);
            self.vx += force * angle.cos();
            self.vy += force * angle.sin();
        }

        self.vx *= physics.drag;
        self.vy *= physics.drag;
        self.x += self.vx + (self.origin_x - self.x) * physics.ease * self.density;
        self.y += self.vy + (self.origin_y - self.y) * physics.ease * self.density;
    }

    /// Pixel the particle lands on, truncated toward zero.
    pub fn pixel(&self) -> Option<(usize, usize)> {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return None;
        }
        let (px, py) = (self.x.trunc(), self.y.trunc());
        (px >= 0.0 && py >= 0.0).then_some((px as usize, py as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokbal_core::{DENSITY_MAX, MAX_EASE};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_far_target_is_drag_and_spring_only() {
        let physics = Physics::default();
        let mut p = Particle::at_rest(10.0, 10.0, 2.0);
        p.x = 14.0;
        p.y = 7.0;
        p.vx = 1.5;
        p.vy = -0.5;

        p.step((1000.0, 1000.0), 100.0, &physics);

        let vx = 1.5 * physics.drag;
        let vy = -0.5 * physics.drag;
        assert!(approx(p.vx, vx));
        assert!(approx(p.vy, vy));
        assert!(approx(p.x, 14.0 + vx + (10.0 - 14.0) * physics.ease * 2.0));
        assert!(approx(p.y, 7.0 + vy + (10.0 - 7.0) * physics.ease * 2.0));
    }

    #[test]
    fn test_stiffest_spring_settles_below_max_ease() {
        let physics = Physics {
            ease: 0.99 * MAX_EASE,
            ..Physics::default()
        };
        let density = 0.999 * DENSITY_MAX;
        let mut p = Particle::at_rest(20.0, 20.0, density);
        p.x = 30.0;
        for _ in 0..200 {
            p.step((-1000.0, -1000.0), 100.0, &physics);
        }
        assert!((p.x - 20.0).abs() < 1.0, "spring diverged to {}", p.x);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_near_target_pushes_away() {
        let physics = Physics {
            drag: 1.0,
            ease: 0.0,
            mouse_factor: 0.1,
        };
        let mut p = Particle::at_rest(50.0, 50.0, 1.0);
        let target = (53.0, 54.0);
        let diameter = 10_000.0;

        p.step(target, diameter, &physics);

        // distance² = 25, force = -400 along (3, 4) / 5
        let angle = 4.0f32.atan2(3.0);
        assert!(approx(p.vx, -400.0 * angle.cos()));
        assert!(approx(p.vy, -400.0 * angle.sin()));
        assert!(approx(p.vx, -240.0));
        assert!(approx(p.vy, -320.0));
        assert!(p.x < 50.0 && p.y < 50.0);
    }

    #[test]
    fn test_force_uses_pre_drag_velocity() {
        let physics = Physics {
            drag: 0.5,
            ease: 0.0,
            mouse_factor: 0.1,
        };
        let mut p = Particle::at_rest(0.0, 0.0, 1.0);
        p.vx = 2.0;
        p.step((10.0, 0.0), 1000.0, &physics);
        // (2 + -10) * 0.5
        assert!(approx(p.vx, -4.0));
        assert!(approx(p.x, -4.0));
    }

    #[test]
    fn test_coincident_target_is_ignored() {
        let physics = Physics::default();
        let mut p = Particle::at_rest(5.0, 5.0, 3.0);
        p.step((5.0, 5.0), 1e6, &physics);
        assert_eq!(p, Particle::at_rest(5.0, 5.0, 3.0));
    }

    #[test]
    fn test_pixel_truncates() {
        let mut p = Particle::at_rest(3.9, 7.2, 0.0);
        assert_eq!(p.pixel(), Some((3, 7)));
        p.x = -0.5;
        assert_eq!(p.pixel(), Some((0, 7)));
        p.x = -1.5;
        assert_eq!(p.pixel(), None);
        p.x = f32::NAN;
        assert_eq!(p.pixel(), None);
    }
}
