//! Input plugin - maps devices to the logical snapshot.
//!
//! Key presses are latched every rendered frame and drained by the next
//! fixed step, so an edge is seen exactly once even when the fixed step runs
//! zero or several times in a frame.

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::HashSet;

use super::snapshot::{GameKey, InputSnapshot};

/// Physical bindings for each logical key.
const KEY_BINDINGS: &[(KeyCode, GameKey)] = &[
    (KeyCode::KeyA, GameKey::MoveLeft),
    (KeyCode::KeyD, GameKey::MoveRight),
    (KeyCode::KeyW, GameKey::MoveForward),
    (KeyCode::KeyS, GameKey::MoveBack),
    (KeyCode::Space, GameKey::Ascend),
    (KeyCode::ShiftLeft, GameKey::Descend),
    (KeyCode::ArrowLeft, GameKey::AimLeft),
    (KeyCode::ArrowRight, GameKey::AimRight),
    (KeyCode::ArrowUp, GameKey::AimUp),
    (KeyCode::ArrowDown, GameKey::AimDown),
    (KeyCode::Digit1, GameKey::Weapon1),
    (KeyCode::Digit2, GameKey::Weapon2),
    (KeyCode::Digit3, GameKey::Weapon3),
    (KeyCode::Digit4, GameKey::Weapon4),
    (KeyCode::KeyB, GameKey::ThrowBomb),
    (KeyCode::KeyF, GameKey::SuperPower),
    (KeyCode::F1, GameKey::ToggleCheat),
    (KeyCode::F2, GameKey::CycleAim),
    (KeyCode::KeyR, GameKey::Restart),
];

/// System set for building the snapshot inside `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSet;

/// Presses seen since the last fixed step.
#[derive(Resource, Default)]
pub struct InputLatch {
    pressed: HashSet<GameKey>,
}

/// Snapshot handed to the simulation for the current fixed step.
#[derive(Resource, Default)]
pub struct CurrentInput(pub InputSnapshot);

/// Input plugin - latches presses and captures the per-step snapshot.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputLatch>()
            .init_resource::<CurrentInput>()
            .add_systems(PreUpdate, latch_key_presses.after(InputSystem))
            .add_systems(FixedUpdate, capture_input.in_set(InputSet));
    }
}

/// Remember every bound key pressed this frame.
fn latch_key_presses(keyboard: Res<ButtonInput<KeyCode>>, mut latch: ResMut<InputLatch>) {
    for (code, key) in KEY_BINDINGS {
        if keyboard.just_pressed(*code) {
            latch.pressed.insert(*key);
        }
    }
}

/// Build the snapshot the simulation reads this step.
fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut latch: ResMut<InputLatch>,
    mut current: ResMut<CurrentInput>,
) {
    let mut snapshot = match window_query.get_single() {
        Ok(window) => {
            let size = Vec2::new(window.width(), window.height());
            let mut snapshot = InputSnapshot::centered(size);
            // A pointer outside the window rests at the center (no aim)
            if let Some(cursor) = window.cursor_position() {
                snapshot.pointer = cursor;
            }
            snapshot
        }
        Err(_) => InputSnapshot::default(),
    };

    snapshot.held = KEY_BINDINGS
        .iter()
        .filter(|(code, _)| keyboard.pressed(*code))
        .map(|(_, key)| *key)
        .collect();
    snapshot.just_pressed = latch.pressed.drain().collect();
    snapshot.primary = mouse.pressed(MouseButton::Left);
    snapshot.secondary = mouse.pressed(MouseButton::Right);

    current.0 = snapshot;
}
