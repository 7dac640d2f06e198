//! Orbital Shooter - Entry Point
//!
//! Controls:
//! - WASD: Move, Space/Shift: Up/Down
//! - Mouse or arrow keys: Aim (F2 cycles mouse/keys/auto)
//! - Left mouse: Fire, Right mouse or B: Bomb
//! - 1-4: Weapons, F: Super power, F1: Cheat mode
//! - R: Restart after game over, Escape: Quit

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins; sound goes through kira instead of bevy_audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Orbital Shooter".to_string(),
                        resolution: (1200.0, 800.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Our game plugin
        .add_plugins(orbital_shooter::OrbitalShooterPlugin)

        .run();
}
