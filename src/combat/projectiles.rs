//! Player-fired projectiles and bombs.

use bevy::prelude::*;

use super::weapons::WeaponKind;
use crate::core::{frame_scale, heading, Kinematic};
use crate::rendering::Canvas;

/// Seconds a projectile flies before fizzling out.
pub const PROJECTILE_LIFETIME: f32 = 1.0;
/// Collision radius around the projectile's ray.
pub const PROJECTILE_RADIUS: f32 = 2.0;
/// Length of the projectile's hit segment and trail.
pub const PROJECTILE_LENGTH: f32 = 5.0;

/// Bombs travel at this fraction of the global projectile speed.
pub const BOMB_SPEED_FACTOR: f32 = 0.5;
pub const BOMB_LIFETIME: f32 = 2.0;
pub const BOMB_EXPLOSION_RADIUS: f32 = 5.0;
/// Seconds the blast stays visible after detonation.
pub const BOMB_LINGER: f32 = 0.5;
pub const BOMB_ENEMY_DAMAGE: i32 = 2;
pub const BOMB_BOSS_DAMAGE: i32 = 4;

/// A single shot travelling along a straight line.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub origin: Vec3,
    pub target: Vec3,
    pub position: Vec3,
    pub weapon: WeaponKind,
    /// Unit vector, or zero when origin and target coincide
    pub direction: Vec3,
    pub speed: f32,
    pub lifetime: f32,
    pub active: bool,
    pub radius: f32,
    pub length: f32,
}

impl Projectile {
    /// Create a shot from `origin` toward `target`.
    ///
    /// Speed is the weapon's speed times `speed_multiplier`.
    pub fn new(origin: Vec3, target: Vec3, weapon: WeaponKind, speed_multiplier: f32) -> Self {
        Self {
            origin,
            target,
            position: origin,
            weapon,
            direction: heading(origin, target),
            speed: weapon.stats().speed * speed_multiplier,
            lifetime: PROJECTILE_LIFETIME,
            active: true,
            radius: PROJECTILE_RADIUS,
            length: PROJECTILE_LENGTH,
        }
    }

    pub fn damage(&self) -> i32 {
        self.weapon.stats().damage
    }

    /// Spend the projectile on a confirmed hit.
    pub fn consume(&mut self) {
        self.active = false;
    }

    /// Whether a sphere at `center` with `radius` lies on this shot's segment.
    ///
    /// The target counts as hit when its distance to the ray is below the
    /// combined radii and its projection onto the direction falls within
    /// `[0, length]`. A shot without direction never hits.
    pub fn hits(&self, center: Vec3, radius: f32) -> bool {
        if self.direction == Vec3::ZERO {
            return false;
        }
        let offset = center - self.position;
        let perpendicular = offset.cross(self.direction).length();
        let along = offset.dot(self.direction);
        perpendicular < radius + self.radius && (0.0..=self.length).contains(&along)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let color = self.weapon.stats().color;
        let tail = |length: f32| self.position - self.direction * length;

        match self.weapon {
            WeaponKind::Laser => canvas.line(self.position, tail(self.length), color),
            WeaponKind::Plasma => canvas.sphere(self.position, 0.5, color),
            WeaponKind::Missile => {
                canvas.line(self.position, tail(self.length), color);
                canvas.sphere(self.position, 0.3, color);
            }
            WeaponKind::Railgun => canvas.line(self.position, tail(self.length * 2.0), color),
        }
    }
}

impl Kinematic for Projectile {
    fn advance(&mut self, dt: f32) {
        self.position += self.direction * self.speed * frame_scale(dt);
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.active = false;
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

/// Flight phase of a bomb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BombState {
    Traveling,
    Detonated,
}

/// A slow projectile that bursts into an area blast at the end of its flight.
#[derive(Debug, Clone)]
pub struct Bomb {
    pub origin: Vec3,
    pub target: Vec3,
    pub position: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    pub lifetime: f32,
    pub state: BombState,
    pub explosion_radius: f32,
    /// Seconds left before the blast disappears
    pub linger: f32,
    pub active: bool,
    announced: bool,
}

impl Bomb {
    pub fn new(origin: Vec3, target: Vec3, projectile_speed: f32) -> Self {
        Self {
            origin,
            target,
            position: origin,
            direction: heading(origin, target),
            speed: projectile_speed * BOMB_SPEED_FACTOR,
            lifetime: BOMB_LIFETIME,
            state: BombState::Traveling,
            explosion_radius: BOMB_EXPLOSION_RADIUS,
            linger: BOMB_LINGER,
            active: true,
            announced: false,
        }
    }

    pub fn is_detonated(&self) -> bool {
        self.state == BombState::Detonated
    }

    /// Returns true exactly once, on the first call after detonation.
    pub fn take_detonation(&mut self) -> bool {
        if self.is_detonated() && !self.announced {
            self.announced = true;
            true
        } else {
            false
        }
    }

    /// Whether `center` is inside a live blast. The blast deals damage on
    /// every frame of its linger.
    pub fn in_blast(&self, center: Vec3) -> bool {
        self.is_detonated() && self.active && self.position.distance(center) < self.explosion_radius
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self.state {
            BombState::Traveling => canvas.sphere(self.position, 0.5, Color::srgb(0.5, 0.5, 0.5)),
            BombState::Detonated => {
                let grown = 1.0 - (self.linger / BOMB_LINGER).max(0.0);
                canvas.sphere(
                    self.position,
                    self.explosion_radius * grown,
                    Color::srgba(1.0, 0.5, 0.0, 0.7),
                );
            }
        }
    }
}

impl Kinematic for Bomb {
    fn advance(&mut self, dt: f32) {
        match self.state {
            BombState::Traveling => {
                self.position += self.direction * self.speed * frame_scale(dt);
                self.lifetime -= dt;
                if self.lifetime <= 0.0 {
                    self.state = BombState::Detonated;
                }
            }
            BombState::Detonated => {
                self.linger -= dt;
                if self.linger <= 0.0 {
                    self.active = false;
                }
            }
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FIXED_DT;

    #[test]
    fn projectile_moves_one_speed_per_reference_frame() {
        let mut shot = Projectile::new(Vec3::ZERO, Vec3::X * 100.0, WeaponKind::Laser, 1.5);
        assert!((shot.speed - 2.25).abs() < 1e-6);

        shot.advance(FIXED_DT);
        assert!((shot.position.x - 2.25).abs() < 1e-4);
    }

    #[test]
    fn projectile_expires_once_and_stays_expired() {
        let mut shot = Projectile::new(Vec3::ZERO, Vec3::X, WeaponKind::Plasma, 1.5);
        let mut previous = shot.lifetime;
        let mut flips = 0;
        let mut was_active = true;

        for _ in 0..120 {
            shot.advance(FIXED_DT);
            assert!(shot.lifetime < previous);
            previous = shot.lifetime;
            if was_active && !shot.is_active() {
                flips += 1;
            }
            assert!(was_active || !shot.is_active(), "projectile reactivated");
            was_active = shot.is_active();
        }

        assert_eq!(flips, 1);
    }

    #[test]
    fn zero_length_aim_does_not_move_or_hit() {
        let mut shot = Projectile::new(Vec3::ONE, Vec3::ONE, WeaponKind::Laser, 1.5);
        shot.advance(FIXED_DT);
        assert_eq!(shot.position, Vec3::ONE);
        assert!(!shot.hits(Vec3::ONE, 10.0));
    }

    #[test]
    fn hit_test_respects_segment_bounds() {
        let shot = Projectile::new(Vec3::ZERO, Vec3::X * 100.0, WeaponKind::Laser, 1.5);

        assert!(shot.hits(Vec3::new(3.0, 0.0, 0.0), 1.0));
        assert!(shot.hits(Vec3::new(5.0, 2.5, 0.0), 1.0));
        // Beyond the segment
        assert!(!shot.hits(Vec3::new(5.5, 0.0, 0.0), 1.0));
        // Behind the projectile
        assert!(!shot.hits(Vec3::new(-0.5, 0.0, 0.0), 1.0));
        // Too far off the ray
        assert!(!shot.hits(Vec3::new(2.0, 3.5, 0.0), 1.0));
    }

    #[test]
    fn bomb_detonates_then_lingers_then_expires() {
        let mut bomb = Bomb::new(Vec3::ZERO, Vec3::Y * 10.0, 1.5);
        assert!(!bomb.take_detonation());
        assert!(!bomb.in_blast(bomb.position));

        let steps_to_detonate = (BOMB_LIFETIME / FIXED_DT).ceil() as usize + 1;
        for _ in 0..steps_to_detonate {
            bomb.advance(FIXED_DT);
        }
        assert!(bomb.is_detonated());
        assert!(bomb.is_active());
        let resting = bomb.position;

        assert!(bomb.take_detonation());
        assert!(!bomb.take_detonation());
        assert!(bomb.in_blast(resting + Vec3::X));

        for _ in 0..((BOMB_LINGER / FIXED_DT).ceil() as usize + 2) {
            bomb.advance(FIXED_DT);
        }
        assert_eq!(bomb.position, resting);
        assert!(!bomb.is_active());
        assert!(!bomb.in_blast(resting));
    }
}
