//! Enemy data: kinds, per-kind stats and the shared enemy record.

use bevy::prelude::*;

use crate::rendering::Canvas;

/// Seconds an enemy flashes (and ignores further projectile hits) after a hit.
pub const HIT_FLASH: f32 = 0.2;
/// Bosses always move at this speed, whatever the spawn roll.
pub const BOSS_SPEED: f32 = 0.12;

/// Enemy variant. The boss is just another variant with its own stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Normal,
    Fast,
    Tank,
    Boss,
}

/// Stat modifiers for one kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindProfile {
    /// Multiplier applied to the rolled base speed (ignored for the boss)
    pub speed_factor: f32,
    pub health: i32,
    pub radius: f32,
    pub color: Color,
    pub flash_color: Color,
}

impl EnemyKind {
    /// Kinds the regular spawner picks from.
    pub const GRUNTS: [EnemyKind; 3] = [EnemyKind::Normal, EnemyKind::Fast, EnemyKind::Tank];

    pub fn profile(self) -> KindProfile {
        let flash = Color::srgb(1.0, 0.5, 0.5);
        match self {
            EnemyKind::Normal => KindProfile {
                speed_factor: 1.0,
                health: 2,
                radius: 1.0,
                color: Color::srgb(1.0, 0.0, 0.0),
                flash_color: flash,
            },
            EnemyKind::Fast => KindProfile {
                speed_factor: 1.5,
                health: 1,
                radius: 1.0,
                color: Color::srgb(1.0, 0.0, 1.0),
                flash_color: flash,
            },
            EnemyKind::Tank => KindProfile {
                speed_factor: 0.7,
                health: 4,
                radius: 1.5,
                color: Color::srgb(0.5, 0.5, 1.0),
                flash_color: flash,
            },
            EnemyKind::Boss => KindProfile {
                speed_factor: 1.0,
                health: 10,
                radius: 3.0,
                color: Color::srgb(1.0, 0.5, 0.0),
                flash_color: Color::srgb(1.0, 1.0, 0.5),
            },
        }
    }
}

/// A hostile chasing the player.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Vec3,
    /// Units per reference frame
    pub speed: f32,
    pub health: i32,
    pub radius: f32,
    /// Seconds left of the post-hit flash
    pub hit_cooldown: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    /// Build an enemy of `kind` with a rolled `base_speed`.
    pub fn new(kind: EnemyKind, position: Vec3, base_speed: f32) -> Self {
        let profile = kind.profile();
        let speed = match kind {
            EnemyKind::Boss => BOSS_SPEED,
            _ => base_speed * profile.speed_factor,
        };

        Self {
            position,
            speed,
            health: profile.health,
            radius: profile.radius,
            hit_cooldown: 0.0,
            kind,
        }
    }

    pub fn boss(position: Vec3) -> Self {
        Self::new(EnemyKind::Boss, position, BOSS_SPEED)
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Projectiles only land while the hit flash is over.
    pub fn can_be_hit(&self) -> bool {
        self.hit_cooldown <= 0.0 && !self.is_dead()
    }

    /// Projectile hit: take damage and start the flash.
    pub fn strike(&mut self, damage: i32) {
        self.apply_damage(damage);
        self.hit_cooldown = HIT_FLASH;
    }

    /// Raw damage without flash (blasts, super power).
    pub fn apply_damage(&mut self, damage: i32) {
        debug_assert!(damage >= 0, "negative damage {}", damage);
        self.health -= damage;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let profile = self.kind.profile();
        let color = if self.hit_cooldown > 0.0 {
            profile.flash_color
        } else {
            profile.color
        };
        canvas.sphere(self.position, self.radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_apply_their_modifiers() {
        let fast = Enemy::new(EnemyKind::Fast, Vec3::ZERO, 0.2);
        assert!((fast.speed - 0.3).abs() < 1e-6);
        assert_eq!(fast.health, 1);

        let tank = Enemy::new(EnemyKind::Tank, Vec3::ZERO, 0.2);
        assert!((tank.speed - 0.14).abs() < 1e-6);
        assert_eq!(tank.health, 4);
        assert_eq!(tank.radius, 1.5);

        let normal = Enemy::new(EnemyKind::Normal, Vec3::ZERO, 0.2);
        assert_eq!(normal.health, 2);
        assert_eq!(normal.radius, 1.0);
    }

    #[test]
    fn boss_ignores_rolled_speed() {
        let boss = Enemy::new(EnemyKind::Boss, Vec3::ZERO, 0.29);
        assert_eq!(boss.speed, BOSS_SPEED);
        assert_eq!(boss.health, 10);
        assert_eq!(boss.radius, 3.0);
        assert!(boss.is_boss());
    }

    #[test]
    fn strike_starts_flash_and_blocks_hits() {
        let mut enemy = Enemy::new(EnemyKind::Normal, Vec3::ZERO, 0.1);
        enemy.strike(1);
        assert_eq!(enemy.health, 1);
        assert!(!enemy.can_be_hit());

        enemy.apply_damage(1);
        assert!(enemy.is_dead());
    }
}
