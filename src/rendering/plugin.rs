//! Rendering plugin - chase camera, lighting and celestial meshes.
//!
//! Gameplay entities are drawn as gizmos by the simulation plugin. This
//! plugin only sets up what surrounds them.

use bevy::prelude::*;

use super::camera::{spawn_camera, track_player};
use super::textures::{spawn_celestial_meshes, sync_celestial_meshes};
use super::visual_config::VisualConfig;

/// Rendering plugin - configures the scene around the simulation.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        let visual = VisualConfig::load();
        app.insert_resource(ClearColor(visual.clear_color()))
            .insert_resource(visual)
            // The world resource is inserted during Startup
            .add_systems(PostStartup, (spawn_camera, spawn_celestial_meshes))
            .add_systems(Update, (track_player, sync_celestial_meshes));
    }
}
