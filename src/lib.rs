//! Orbital Shooter - a 3D arena shooter set inside a small solar system.
//!
//! The player floats among orbiting planets, fending off waves of enemies
//! and periodic bosses with four weapons, bombs and a screen-clearing super
//! power.
//!
//! # Architecture
//!
//! All gameplay lives in [`world::GameWorld`], plain Rust data stepped at a
//! fixed 60 Hz and drawn through the [`rendering::Canvas`] trait. The Bevy
//! plugins around it only feed input in and carry results out:
//!
//! - **Core**: Config, errors, events, game states, fixed cadence
//! - **Input**: Key latch and per-step input snapshot
//! - **World**: Simulation resource, fixed step, gizmo drawing
//! - **Rendering**: Chase camera, lighting, planet meshes
//! - **UI**: HUD, minimap, crosshair, game-over screen
//! - **Audio**: Sound cues for gameplay events

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod input;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct OrbitalShooterPlugin;

impl Plugin for OrbitalShooterPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input snapshot
            .add_plugins(input::InputPlugin)

            // Simulation
            .add_plugins(world::SimulationPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin)

            // Sound
            .add_plugins(audio::AudioFeedbackPlugin);
    }
}
