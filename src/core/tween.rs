//! Smoothed follow motion for the chase camera.

use bevy::prelude::*;

/// Component that eases a transform toward a goal and keeps it aimed.
#[derive(Component)]
pub struct SmoothFollow {
    /// Where the transform should end up
    pub goal: Vec3,
    /// Point the transform keeps looking at
    pub focus: Vec3,
    /// World up axis used when aiming
    pub up: Vec3,
    /// Interpolation speed multiplier (higher = snappier)
    pub speed: f32,
}

impl Default for SmoothFollow {
    fn default() -> Self {
        Self {
            goal: Vec3::ZERO,
            focus: Vec3::ZERO,
            up: Vec3::Z,
            speed: 8.0,
        }
    }
}

impl SmoothFollow {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            ..default()
        }
    }

    /// Blend factor for one frame of `dt` seconds.
    pub fn blend(&self, dt: f32) -> f32 {
        (self.speed * dt).clamp(0.0, 1.0)
    }
}

/// System that eases followers toward their goals.
pub fn update_smooth_follow(time: Res<Time>, mut query: Query<(&mut Transform, &SmoothFollow)>) {
    let dt = time.delta_secs();

    for (mut transform, follow) in query.iter_mut() {
        let t = follow.blend(dt);
        transform.translation = transform.translation.lerp(follow.goal, t);
        transform.look_at(follow.focus, follow.up);
    }
}
