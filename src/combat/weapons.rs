//! Weapon catalog and volley geometry.

use bevy::prelude::*;

/// Every weapon the player can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeaponKind {
    /// Rapid, low damage
    #[default]
    Laser,
    /// Slower, heavier bolts
    Plasma,
    /// Slow, heavy hitting
    Missile,
    /// Single high damage shot, no spread
    Railgun,
}

/// Static stats for one weapon kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub color: Color,
    pub damage: i32,
    /// Multiplied by the global projectile speed
    pub speed: f32,
    /// Seconds between volleys
    pub cooldown: f32,
    /// Radians between neighbouring shots of a volley
    pub spread: f32,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Laser,
        WeaponKind::Plasma,
        WeaponKind::Missile,
        WeaponKind::Railgun,
    ];

    pub fn stats(self) -> WeaponStats {
        match self {
            WeaponKind::Laser => WeaponStats {
                color: Color::srgb(0.0, 1.0, 1.0),
                damage: 1,
                speed: 1.5,
                cooldown: 0.2,
                spread: 0.05,
            },
            WeaponKind::Plasma => WeaponStats {
                color: Color::srgb(1.0, 0.0, 1.0),
                damage: 2,
                speed: 1.0,
                cooldown: 0.4,
                spread: 0.1,
            },
            WeaponKind::Missile => WeaponStats {
                color: Color::srgb(1.0, 0.5, 0.0),
                damage: 3,
                speed: 0.8,
                cooldown: 0.8,
                spread: 0.02,
            },
            WeaponKind::Railgun => WeaponStats {
                color: Color::srgb(0.0, 1.0, 0.0),
                damage: 4,
                speed: 2.0,
                cooldown: 1.0,
                spread: 0.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Laser => "Laser",
            WeaponKind::Plasma => "Plasma",
            WeaponKind::Missile => "Missile",
            WeaponKind::Railgun => "Railgun",
        }
    }

    /// Weapon bound to a zero-based select slot.
    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    /// Shots per volley before power-ups.
    pub fn base_shots(self) -> usize {
        match self {
            WeaponKind::Railgun => 1,
            _ => 3,
        }
    }

    /// Whether multishot widens this weapon's fan.
    pub fn fans_out(self) -> bool {
        self.base_shots() > 1
    }
}

/// Fan `shots` directions around `aim`, rotating in the XY plane.
///
/// Shot `i` is turned by `(i - (shots - 1) / 2) * spread`; the z component
/// is kept as is, so the fan is symmetric about `aim`.
pub fn spread_directions(aim: Vec3, shots: usize, spread: f32) -> Vec<Vec3> {
    let middle = (shots as f32 - 1.0) / 2.0;

    (0..shots)
        .map(|i| {
            let (sin, cos) = ((i as f32 - middle) * spread).sin_cos();
            Vec3::new(aim.x * cos - aim.y * sin, aim.x * sin + aim.y * cos, aim.z)
        })
        .collect()
}
