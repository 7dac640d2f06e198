//! Decorative solar system the fight takes place in.
//!
//! Bodies orbit the origin in the XY plane and never collide with anything.

use bevy::prelude::*;
use rand::Rng;

use crate::rendering::Canvas;

const ORBIT_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);

/// Wrap degrees into [0, 360).
fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: &'static str,
    pub radius: f32,
    /// Orbit radius around the origin
    pub distance: f32,
    /// Days per orbit, 0 for a body that stays put
    pub orbit_period: f32,
    /// Days per spin, negative for retrograde rotation
    pub rotation_period: f32,
    pub color: Color,
    /// Orbit angle in degrees, always in [0, 360)
    pub angle: f32,
    /// Spin angle in degrees, always in [0, 360)
    pub rotation_angle: f32,
}

impl CelestialBody {
    pub fn new(
        name: &'static str,
        radius: f32,
        distance: f32,
        orbit_period: f32,
        rotation_period: f32,
        color: Color,
        angle: f32,
    ) -> Self {
        Self {
            name,
            radius,
            distance,
            orbit_period,
            rotation_period,
            color,
            angle: wrap_degrees(angle),
            rotation_angle: 0.0,
        }
    }

    pub fn orbits(&self) -> bool {
        self.orbit_period != 0.0
    }

    /// Advance orbit and spin by `time_delta` simulated seconds.
    pub fn update(&mut self, time_delta: f32) {
        if self.orbits() {
            self.angle = wrap_degrees(self.angle + 360.0 / self.orbit_period * time_delta);
        }
        if self.rotation_period != 0.0 {
            self.rotation_angle =
                wrap_degrees(self.rotation_angle + 360.0 / self.rotation_period * time_delta);
        }
    }

    pub fn position(&self) -> Vec3 {
        let angle = self.angle.to_radians();
        Vec3::new(angle.cos() * self.distance, angle.sin() * self.distance, 0.0)
    }

    /// Spin around the Z axis, for mesh rendering.
    pub fn spin(&self) -> Quat {
        Quat::from_rotation_z(self.rotation_angle.to_radians())
    }

    /// Texture looked up for this body when it is drawn as a mesh.
    pub fn texture_path(&self) -> String {
        format!("textures/{}.png", self.name.to_lowercase())
    }

    pub fn draw_orbit(&self, canvas: &mut dyn Canvas) {
        if self.orbits() {
            canvas.ring(Vec3::ZERO, self.distance, ORBIT_COLOR);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.draw_orbit(canvas);
        canvas.sphere(self.position(), self.radius, self.color);
    }
}

/// The sun and the six planets, each starting at a random orbit angle.
pub fn solar_system(rng: &mut impl Rng) -> Vec<CelestialBody> {
    let table: [(&'static str, f32, f32, f32, f32, Color); 7] = [
        ("Sun", 5.0, 0.0, 0.0, 27.0, Color::srgb(1.0, 0.7, 0.0)),
        ("Mercury", 0.4, 10.0, 88.0, 58.6, Color::srgb(0.7, 0.7, 0.7)),
        ("Venus", 0.9, 15.0, 224.7, -243.0, Color::srgb(0.9, 0.7, 0.5)),
        ("Earth", 1.0, 20.0, 365.25, 1.0, Color::srgb(0.0, 0.5, 1.0)),
        ("Mars", 0.5, 25.0, 687.0, 1.03, Color::srgb(0.8, 0.3, 0.2)),
        ("Jupiter", 2.5, 35.0, 4333.0, 0.41, Color::srgb(0.8, 0.6, 0.4)),
        ("Saturn", 2.0, 45.0, 10759.0, 0.45, Color::srgb(0.9, 0.8, 0.5)),
    ];

    table
        .into_iter()
        .map(|(name, radius, distance, orbit, rotation, color)| {
            CelestialBody::new(name, radius, distance, orbit, rotation, color, rng.gen_range(0.0..360.0))
        })
        .collect()
}
