//! Collectible power-ups floating around the arena.

use bevy::prelude::*;
use rand::Rng;
use std::ops::Range;

use crate::enemies::{ring_point, SPAWN_ALTITUDE};
use crate::rendering::Canvas;

pub const POWERUP_RADIUS: f32 = 0.8;
/// Extra reach added to the player radius for pickup.
pub const PICKUP_MARGIN: f32 = 0.5;
/// Distance band around the player new power-ups appear in.
pub const POWERUP_RING: Range<f32> = 10.0..30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Health,
    Speed,
    Shield,
    Multishot,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Speed,
        PowerUpKind::Shield,
        PowerUpKind::Multishot,
    ];

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Health => Color::srgb(0.0, 1.0, 0.0),
            PowerUpKind::Speed => Color::srgb(1.0, 1.0, 0.0),
            PowerUpKind::Shield => Color::srgb(0.0, 0.5, 1.0),
            PowerUpKind::Multishot => Color::srgb(1.0, 0.0, 1.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::Health => "Health",
            PowerUpKind::Speed => "Speed",
            PowerUpKind::Shield => "Shield",
            PowerUpKind::Multishot => "Multishot",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    pub position: Vec3,
    pub kind: PowerUpKind,
    pub radius: f32,
}

impl PowerUp {
    pub fn new(position: Vec3, kind: PowerUpKind) -> Self {
        Self {
            position,
            kind,
            radius: POWERUP_RADIUS,
        }
    }

    /// Roll a random power-up near `player_position`.
    pub fn spawn_near(rng: &mut impl Rng, player_position: Vec3) -> Self {
        let position = ring_point(rng, player_position, POWERUP_RING, SPAWN_ALTITUDE);
        let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
        Self::new(position, kind)
    }

    pub fn touches(&self, center: Vec3, radius: f32) -> bool {
        self.position.distance(center) < radius + PICKUP_MARGIN
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.sphere(self.position, self.radius, self.kind.color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pickup_reach_includes_margin() {
        let powerup = PowerUp::new(Vec3::ZERO, PowerUpKind::Speed);
        assert!(powerup.touches(Vec3::new(0.9, 0.0, 0.0), 0.5));
        assert!(!powerup.touches(Vec3::new(1.0, 0.0, 0.0), 0.5));
    }

    #[test]
    fn spawns_around_player() {
        let mut rng = StdRng::seed_from_u64(8);
        let player = Vec3::new(100.0, 50.0, 20.0);
        for _ in 0..50 {
            let powerup = PowerUp::spawn_near(&mut rng, player);
            let planar = (powerup.position - player).truncate().length();
            assert!(planar >= POWERUP_RING.start - 1e-3 && planar <= POWERUP_RING.end + 1e-3);
        }
    }
}
