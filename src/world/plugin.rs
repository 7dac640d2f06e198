//! Simulation plugin - owns the `GameWorld` resource and drives it.

use bevy::prelude::*;

use super::game_world::GameWorld;
use crate::core::{GameConfig, GameEvent, GameState};
use crate::input::{CurrentInput, InputSet};

/// System set for the fixed simulation step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Simulation plugin - steps the world at the fixed rate and draws it.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, create_world)
            .add_systems(
                FixedUpdate,
                (step_world, publish_events, sync_game_state)
                    .chain()
                    .in_set(SimulationSet)
                    .after(InputSet),
            )
            .add_systems(Update, draw_world);
    }
}

fn create_world(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(GameWorld::from_config(config.clone()));
}

fn step_world(time: Res<Time>, input: Res<CurrentInput>, mut world: ResMut<GameWorld>) {
    world.update(time.delta_secs(), &input.0);
}

/// Forward the world's event records to the Bevy event channel.
fn publish_events(mut world: ResMut<GameWorld>, mut events: EventWriter<GameEvent>) {
    events.send_batch(world.drain_events());
}

fn sync_game_state(
    world: Res<GameWorld>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let wanted = if world.game_over {
        GameState::GameOver
    } else {
        GameState::Playing
    };
    if *state.get() != wanted {
        next_state.set(wanted);
    }
}

fn draw_world(world: Res<GameWorld>, mut gizmos: Gizmos) {
    world.draw(&mut gizmos);
}
