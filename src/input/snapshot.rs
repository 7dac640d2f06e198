//! Per-frame input snapshot.
//!
//! The simulation never polls devices. Each step it receives one
//! `InputSnapshot` describing which logical keys are held, which were pressed
//! since the previous step, and where the pointer is.

use bevy::prelude::*;
use std::collections::HashSet;

/// Logical game actions, decoupled from physical key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBack,
    Ascend,
    Descend,
    AimLeft,
    AimRight,
    AimUp,
    AimDown,
    Weapon1,
    Weapon2,
    Weapon3,
    Weapon4,
    ThrowBomb,
    SuperPower,
    ToggleCheat,
    CycleAim,
    Restart,
}

impl GameKey {
    /// Weapon-select keys in slot order.
    pub const WEAPON_SLOTS: [GameKey; 4] = [
        GameKey::Weapon1,
        GameKey::Weapon2,
        GameKey::Weapon3,
        GameKey::Weapon4,
    ];
}

/// Everything the simulation reads from the player's devices in one step.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Keys currently held down
    pub held: HashSet<GameKey>,
    /// Keys pressed since the previous step (edge-triggered actions)
    pub just_pressed: HashSet<GameKey>,
    /// Pointer position in window pixels, origin top-left
    pub pointer: Vec2,
    /// Window size in pixels
    pub screen_size: Vec2,
    /// Primary pointer button (fire)
    pub primary: bool,
    /// Secondary pointer button (bomb)
    pub secondary: bool,
}

impl InputSnapshot {
    pub fn held(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    pub fn just_pressed(&self, key: GameKey) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn screen_center(&self) -> Vec2 {
        self.screen_size / 2.0
    }

    /// Snapshot with the pointer resting at the center of a `size` window.
    pub fn centered(size: Vec2) -> Self {
        Self {
            pointer: size / 2.0,
            screen_size: size,
            ..default()
        }
    }

    pub fn with_held(mut self, keys: &[GameKey]) -> Self {
        self.held.extend(keys.iter().copied());
        self
    }

    /// Mark keys as freshly pressed (and therefore held).
    pub fn with_pressed(mut self, keys: &[GameKey]) -> Self {
        self.just_pressed.extend(keys.iter().copied());
        self.held.extend(keys.iter().copied());
        self
    }

    pub fn with_pointer(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_trigger(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn with_secondary(mut self) -> Self {
        self.secondary = true;
        self
    }
}
