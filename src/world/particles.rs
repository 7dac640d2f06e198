//! Short-lived debris for explosions and the super power burst.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::core::{frame_scale, Kinematic};
use crate::rendering::Canvas;

/// Lifetime at which a particle is still fully opaque.
pub const FADE_WINDOW: f32 = 0.5;
pub const PARTICLE_RADIUS: f32 = 0.1;

pub const EXPLOSION_PARTICLES: usize = 20;
pub const BURST_COLOR: Color = Color::srgb(1.0, 0.8, 0.0);
pub const BURST_LIFETIME: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec3,
    /// Units per reference frame
    pub velocity: Vec3,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3, color: Color, lifetime: f32) -> Self {
        Self {
            position,
            velocity,
            color,
            lifetime,
        }
    }

    /// Opacity falls off over the last half second.
    pub fn alpha(&self) -> f32 {
        (self.lifetime / FADE_WINDOW).clamp(0.0, 1.0)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.sphere(self.position, PARTICLE_RADIUS, self.color.with_alpha(self.alpha()));
    }
}

impl Kinematic for Particle {
    fn advance(&mut self, dt: f32) {
        self.position += self.velocity * frame_scale(dt);
        self.lifetime -= dt;
    }

    fn is_active(&self) -> bool {
        self.lifetime > 0.0
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// Append a small explosion at `position`.
pub fn spawn_explosion(particles: &mut Vec<Particle>, rng: &mut impl Rng, position: Vec3, color: Color) {
    particles.extend((0..EXPLOSION_PARTICLES).map(|_| {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(0.5..2.0);
        let rise = rng.gen_range(-1.0..1.0) * speed;
        let velocity = Vec3::new(angle.cos() * speed, angle.sin() * speed, rise);
        Particle::new(position, velocity, color, FADE_WINDOW)
    }));
}

/// Append the wide golden burst that marks super power activation.
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut impl Rng, position: Vec3, count: usize) {
    particles.extend((0..count).map(|_| {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(5.0..15.0);
        let velocity = Vec3::new(angle.cos() * speed, angle.sin() * speed, rng.gen_range(-5.0..5.0));
        Particle::new(position, velocity, BURST_COLOR, BURST_LIFETIME)
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{advance_and_prune, FIXED_DT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn explosion_spawns_fixed_count_and_fades() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut particles = Vec::new();
        spawn_explosion(&mut particles, &mut rng, Vec3::ZERO, Color::WHITE);
        assert_eq!(particles.len(), EXPLOSION_PARTICLES);
        assert!(particles.iter().all(|p| (p.alpha() - 1.0).abs() < 1e-6));

        for _ in 0..15 {
            advance_and_prune(&mut particles, FIXED_DT);
        }
        assert!(particles.iter().all(|p| p.alpha() < 0.6 && p.alpha() > 0.4));

        for _ in 0..20 {
            advance_and_prune(&mut particles, FIXED_DT);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn burst_particles_are_fast() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, Vec3::ONE, 100);
        assert_eq!(particles.len(), 100);
        for particle in &particles {
            let planar = particle.velocity.truncate().length();
            assert!((5.0..=15.0).contains(&planar));
            assert_eq!(particle.lifetime, BURST_LIFETIME);
        }
    }
}
