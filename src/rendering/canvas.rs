//! Immediate-mode drawing surface every entity renders onto.
//!
//! Entities only describe themselves as spheres and line segments; the
//! gizmo backend (or a test recorder) decides what that means on screen.

use bevy::prelude::*;

/// Segments used to approximate a ring.
const RING_SEGMENTS: usize = 64;

/// Render collaborator for `draw` calls. Drawing never mutates game state.
pub trait Canvas {
    fn sphere(&mut self, center: Vec3, radius: f32, color: Color);

    fn line(&mut self, start: Vec3, end: Vec3, color: Color);

    /// Circle in the XY plane around `center`.
    fn ring(&mut self, center: Vec3, radius: f32, color: Color) {
        let point = |i: usize| {
            let angle = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        };
        for i in 0..RING_SEGMENTS {
            self.line(point(i), point(i + 1), color);
        }
    }
}

impl Canvas for Gizmos<'_, '_> {
    fn sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        Gizmos::sphere(self, Isometry3d::from_translation(center), radius, color);
    }

    fn line(&mut self, start: Vec3, end: Vec3, color: Color) {
        Gizmos::line(self, start, end, color);
    }
}

/// Primitive recorded by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sphere { center: Vec3, radius: f32, color: Color },
    Line { start: Vec3, end: Vec3, color: Color },
}

/// Canvas that just remembers what was drawn. Used by tests and tooling.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn spheres(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Sphere { center, radius, .. } => Some((*center, *radius)),
            DrawCall::Line { .. } => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.calls.push(DrawCall::Sphere { center, radius, color });
    }

    fn line(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.calls.push(DrawCall::Line { start, end, color });
    }
}
