//! Shared motion contract for everything that flies around the arena.
//!
//! Speeds are expressed in units per reference frame (1/60 s). `advance`
//! scales them by the real `dt`, so a step of exactly [`FIXED_DT`] moves an
//! entity by exactly one `speed`.

use bevy::math::Vec3;

/// Frame rate the per-frame speeds are tuned for.
pub const REFERENCE_FPS: f32 = 60.0;

/// Timestep the frame driver feeds into `update`.
pub const FIXED_DT: f32 = 1.0 / REFERENCE_FPS;

/// How many reference frames `dt` covers.
pub fn frame_scale(dt: f32) -> f32 {
    dt * REFERENCE_FPS
}

/// Unit vector from `origin` toward `target`, or zero when they coincide.
pub fn heading(origin: Vec3, target: Vec3) -> Vec3 {
    (target - origin).normalize_or_zero()
}

/// A mobile entity advanced once per frame by its owner.
pub trait Kinematic {
    /// Move and age the entity by `dt` seconds.
    fn advance(&mut self, dt: f32);

    /// False once the entity has expired. Never flips back to true.
    fn is_active(&self) -> bool;

    fn position(&self) -> Vec3;
}

/// Advance every entity, then drop the ones that expired.
pub fn advance_and_prune<T: Kinematic>(entities: &mut Vec<T>, dt: f32) {
    entities.retain_mut(|entity| {
        entity.advance(dt);
        entity.is_active()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Spark {
        position: Vec3,
        lifetime: f32,
    }

    impl Kinematic for Spark {
        fn advance(&mut self, dt: f32) {
            self.position += Vec3::X * frame_scale(dt);
            self.lifetime -= dt;
        }

        fn is_active(&self) -> bool {
            self.lifetime > 0.0
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    #[test]
    fn heading_is_unit_or_zero() {
        let dir = heading(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(heading(Vec3::ONE, Vec3::ONE), Vec3::ZERO);
    }

    #[test]
    fn fixed_dt_is_one_reference_frame() {
        assert!((frame_scale(FIXED_DT) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn prune_drops_only_expired() {
        let mut sparks = vec![
            Spark { position: Vec3::ZERO, lifetime: 0.01 },
            Spark { position: Vec3::ZERO, lifetime: 1.0 },
            Spark { position: Vec3::ZERO, lifetime: 0.02 },
        ];

        advance_and_prune(&mut sparks, FIXED_DT);

        assert_eq!(sparks.len(), 2);
        assert!(sparks.iter().all(|s| (s.position().x - 1.0).abs() < 1e-5));
    }
}
