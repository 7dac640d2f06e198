//! Enemy and boss spawn placement.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

use super::components::{Enemy, EnemyKind};

/// Ring around the origin regular enemies appear on.
pub const ENEMY_RING: Range<f32> = 20.0..40.0;
/// Altitude band for enemies and power-ups.
pub const SPAWN_ALTITUDE: Range<f32> = 5.0..25.0;
/// Range the base enemy speed is rolled from.
pub const ENEMY_SPEED: Range<f32> = 0.1..0.3;
/// Planar distance from the player a boss appears at.
pub const BOSS_SPAWN_DISTANCE: f32 = 45.0;
pub const BOSS_ALTITUDE: f32 = 20.0;

/// Random point on a horizontal ring around `center` at a random altitude.
pub fn ring_point(rng: &mut impl Rng, center: Vec3, radius: Range<f32>, altitude: Range<f32>) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(radius);
    Vec3::new(
        center.x + angle.cos() * distance,
        center.y + angle.sin() * distance,
        rng.gen_range(altitude),
    )
}

/// Roll a regular enemy somewhere on the spawn ring.
pub fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    let position = ring_point(rng, Vec3::ZERO, ENEMY_RING, SPAWN_ALTITUDE);
    let kind = EnemyKind::GRUNTS[rng.gen_range(0..EnemyKind::GRUNTS.len())];
    let base_speed = rng.gen_range(ENEMY_SPEED);
    Enemy::new(kind, position, base_speed)
}

/// Place a boss at a fixed planar distance from the player.
pub fn spawn_boss(rng: &mut impl Rng, player_position: Vec3) -> Enemy {
    let angle = rng.gen_range(0.0..TAU);
    let position = Vec3::new(
        player_position.x + angle.cos() * BOSS_SPAWN_DISTANCE,
        player_position.y + angle.sin() * BOSS_SPAWN_DISTANCE,
        BOSS_ALTITUDE,
    );
    Enemy::boss(position)
}
