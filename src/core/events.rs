//! Gameplay events raised by the simulation.
//!
//! `GameWorld` records what happened during a step; the simulation plugin
//! forwards the records as Bevy events so logging, audio and UI can react
//! without reaching into the world.

use bevy::prelude::*;

use crate::combat::WeaponKind;
use crate::enemies::EnemyKind;
use crate::world::PowerUpKind;

/// Something noteworthy that happened during one simulation step.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The player fired a volley.
    ShotFired { weapon: WeaponKind, count: usize },
    /// The player threw a bomb.
    BombThrown,
    /// A bomb reached the end of its flight.
    BombDetonated { position: Vec3 },
    /// An enemy was destroyed and scored.
    EnemyKilled { kind: EnemyKind, position: Vec3 },
    /// A boss entered the arena.
    BossSpawned { position: Vec3 },
    /// The boss was destroyed.
    BossDefeated,
    /// The player lost a life but survived.
    PlayerHit { lives_left: u32 },
    /// The player lost the last life.
    PlayerDied,
    /// The player touched a power-up.
    PowerUpCollected { kind: PowerUpKind },
    /// The super power burst started.
    SuperPowerActivated,
    /// The wave timer ran out and difficulty went up.
    WaveAdvanced { wave: u32 },
    /// Cheat mode was switched.
    CheatToggled { enabled: bool },
    /// A fresh run started after game over.
    Restarted,
}
