//! Enemy pursuit behavior.

use bevy::prelude::*;

use super::components::Enemy;
use crate::core::{frame_scale, heading};

impl Enemy {
    /// Tick the hit flash and close in on `target` along a straight line.
    ///
    /// Pure pursuit: no steering, no avoidance. An enemy already sitting on
    /// the target stays put.
    pub fn pursue(&mut self, target: Vec3, dt: f32) {
        if self.hit_cooldown > 0.0 {
            self.hit_cooldown -= dt;
        }

        self.position += heading(self.position, target) * self.speed * frame_scale(dt);
    }
}
