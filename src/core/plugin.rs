//! Core plugin that sets up game states, events, config and the frame cadence.

use bevy::app::AppExit;
use bevy::prelude::*;

use super::config::GameConfig;
use super::events::GameEvent;
use super::kinematic::REFERENCE_FPS;
use super::states::GameState;
use super::tween::update_smooth_follow;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Gameplay config (loaded from RON)
/// - The fixed simulation cadence
/// - Game states and the `GameEvent` channel
/// - Quitting on Escape
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Config must exist before the world is created
            .insert_resource(GameConfig::load())
            .insert_resource(Time::<Fixed>::from_hz(REFERENCE_FPS as f64))

            .init_state::<GameState>()
            .add_event::<GameEvent>()

            .add_systems(Update, (handle_quit_input, log_game_events, update_smooth_follow));
    }
}

/// The frame driver owns exit; the simulation never quits by itself.
fn handle_quit_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Quit requested");
        exit.send(AppExit::Success);
    }
}

/// Write the notable simulation events to the log.
fn log_game_events(mut events: EventReader<GameEvent>) {
    for event in events.read() {
        match event {
            GameEvent::ShotFired { .. } | GameEvent::BombThrown | GameEvent::EnemyKilled { .. } => {
                debug!("{:?}", event);
            }
            GameEvent::BossSpawned { position } => info!("Boss spawned at {:?}", position),
            GameEvent::BossDefeated => info!("Boss defeated"),
            GameEvent::PlayerHit { lives_left } => info!("Player hit, {} lives left", lives_left),
            GameEvent::PlayerDied => info!("Player died! Game over."),
            GameEvent::WaveAdvanced { wave } => info!("Wave {} begins", wave),
            GameEvent::CheatToggled { enabled } => info!("Cheat mode {}", if *enabled { "on" } else { "off" }),
            other => debug!("{:?}", other),
        }
    }
}
