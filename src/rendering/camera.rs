//! Chase camera and scene lighting.

use bevy::prelude::*;

use super::visual_config::VisualConfig;
use crate::core::SmoothFollow;
use crate::world::GameWorld;

/// Marker for the main gameplay camera.
#[derive(Component)]
pub struct ChaseCamera;

/// Camera behind and above the player, plus the sun's light.
pub fn spawn_camera(mut commands: Commands, visual: Res<VisualConfig>, world: Res<GameWorld>) {
    let focus = world.player.position;
    let start = focus + visual.camera_offset();

    commands.spawn((
        ChaseCamera,
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(visual.clear_color()),
            ..default()
        },
        Transform::from_translation(start).looking_at(focus, Vec3::Z),
        SmoothFollow {
            goal: start,
            focus,
            ..SmoothFollow::new(visual.camera_smoothing)
        },
    ));

    commands.insert_resource(AmbientLight {
        color: visual.ambient_color(),
        brightness: visual.ambient_brightness,
    });

    // The sun lights the system from the origin
    commands.spawn((
        PointLight {
            color: Color::srgb(1.0, 0.95, 0.85),
            intensity: visual.sun_light_intensity,
            range: visual.sun_light_range,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));
}

/// Point the chase camera at wherever the player is now.
pub fn track_player(
    world: Res<GameWorld>,
    visual: Res<VisualConfig>,
    mut query: Query<&mut SmoothFollow, With<ChaseCamera>>,
) {
    let focus = world.player.position;
    for mut follow in query.iter_mut() {
        follow.goal = focus + visual.camera_offset();
        follow.focus = focus;
    }
}
