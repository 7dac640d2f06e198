//! Which sound each gameplay event triggers.

use crate::core::GameEvent;

/// A short sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Shot,
    Explosion,
    BossSpawn,
    PlayerHit,
    Pickup,
    SuperPower,
}

impl SoundCue {
    pub const ALL: [SoundCue; 6] = [
        SoundCue::Shot,
        SoundCue::Explosion,
        SoundCue::BossSpawn,
        SoundCue::PlayerHit,
        SoundCue::Pickup,
        SoundCue::SuperPower,
    ];

    /// File under assets/ the cue is loaded from.
    pub fn path(self) -> &'static str {
        match self {
            SoundCue::Shot => "sounds/shot.ogg",
            SoundCue::Explosion => "sounds/explosion.ogg",
            SoundCue::BossSpawn => "sounds/boss_spawn.ogg",
            SoundCue::PlayerHit => "sounds/player_hit.ogg",
            SoundCue::Pickup => "sounds/pickup.ogg",
            SoundCue::SuperPower => "sounds/super_power.ogg",
        }
    }

    pub fn volume(self) -> f64 {
        match self {
            SoundCue::Shot => 0.3,
            SoundCue::Explosion => 0.6,
            _ => 0.8,
        }
    }

    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ShotFired { .. } | GameEvent::BombThrown => Some(SoundCue::Shot),
            GameEvent::EnemyKilled { .. }
            | GameEvent::BombDetonated { .. }
            | GameEvent::BossDefeated
            | GameEvent::PlayerDied => Some(SoundCue::Explosion),
            GameEvent::BossSpawned { .. } => Some(SoundCue::BossSpawn),
            GameEvent::PlayerHit { .. } => Some(SoundCue::PlayerHit),
            GameEvent::PowerUpCollected { .. } => Some(SoundCue::Pickup),
            GameEvent::SuperPowerActivated => Some(SoundCue::SuperPower),
            GameEvent::WaveAdvanced { .. } | GameEvent::CheatToggled { .. } | GameEvent::Restarted => None,
        }
    }
}
