//! Player-side state pieces: aim modes, buff timers, super power.

use std::collections::HashMap;

use crate::world::PowerUpKind;

/// How the firing direction is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AimMode {
    /// Pointer offset from the screen center
    #[default]
    Pointer,
    /// Arrow keys
    Keys,
    /// Nearest hostile
    Auto,
}

impl AimMode {
    pub fn next(self) -> Self {
        match self {
            AimMode::Pointer => AimMode::Keys,
            AimMode::Keys => AimMode::Auto,
            AimMode::Auto => AimMode::Pointer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AimMode::Pointer => "Mouse",
            AimMode::Keys => "Keys",
            AimMode::Auto => "Auto",
        }
    }
}

/// Timed power-up effects the player can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Buff {
    Speed,
    Shield,
    Multishot,
}

impl Buff {
    pub const ALL: [Buff; 3] = [Buff::Speed, Buff::Shield, Buff::Multishot];

    /// The buff a power-up grants, if any. Health is instant.
    pub fn from_powerup(kind: PowerUpKind) -> Option<Self> {
        match kind {
            PowerUpKind::Health => None,
            PowerUpKind::Speed => Some(Buff::Speed),
            PowerUpKind::Shield => Some(Buff::Shield),
            PowerUpKind::Multishot => Some(Buff::Multishot),
        }
    }
}

/// Remaining duration of a buff.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BuffTimer {
    #[default]
    Inactive,
    Timed(f32),
    /// Held for as long as cheat mode is on
    Permanent,
}

impl BuffTimer {
    pub fn is_active(self) -> bool {
        !matches!(self, BuffTimer::Inactive)
    }

    /// Count down. Returns true on the tick the timer runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let BuffTimer::Timed(remaining) = self {
            *remaining -= dt;
            if *remaining <= 0.0 {
                *self = BuffTimer::Inactive;
                return true;
            }
        }
        false
    }

    /// Start or refresh the timer. Permanent timers stay permanent.
    pub fn refresh(&mut self, duration: f32) {
        if *self != BuffTimer::Permanent {
            *self = BuffTimer::Timed(duration);
        }
    }

    pub fn remaining(self) -> Option<f32> {
        match self {
            BuffTimer::Timed(remaining) => Some(remaining),
            _ => None,
        }
    }
}

pub type Buffs = HashMap<Buff, BuffTimer>;

/// Screen-clearing burst with a long cooldown.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperPower {
    pub ready: bool,
    /// Seconds until ready again
    pub cooldown: f32,
    pub active: bool,
    /// Seconds of activity left
    pub timer: f32,
    /// Length of the last activation, for the expanding visual
    pub duration: f32,
}

impl Default for SuperPower {
    fn default() -> Self {
        Self {
            ready: true,
            cooldown: 0.0,
            active: false,
            timer: 0.0,
            duration: 0.0,
        }
    }
}

impl SuperPower {
    pub fn tick(&mut self, dt: f32) {
        if !self.ready {
            self.cooldown -= dt;
            if self.cooldown <= 0.0 {
                self.ready = true;
            }
        }
        if self.active {
            self.timer -= dt;
            if self.timer <= 0.0 {
                self.active = false;
            }
        }
    }

    /// Fire the super power if it is ready. Returns whether it started.
    pub fn activate(&mut self, cooldown: f32, duration: f32) -> bool {
        if !self.ready {
            return false;
        }
        self.ready = false;
        self.cooldown = cooldown;
        self.active = true;
        self.timer = duration;
        self.duration = duration;
        true
    }

    /// Seconds since activation, 0 while idle.
    pub fn elapsed(&self) -> f32 {
        if self.active {
            self.duration - self.timer
        } else {
            0.0
        }
    }
}

/// Coarse life state derived from lives and timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Alive,
    Invincible,
    Dead,
}

/// What a call to `take_damage` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Ignored,
    Hit { lives_left: u32 },
    Killed,
}

/// Values cheat mode overrides, restored when it is switched off.
#[derive(Debug, Clone)]
pub(crate) struct CheatBackup {
    pub lives: u32,
    pub shield_active: bool,
    pub buffs: Buffs,
    pub auto_fire: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aim_modes_cycle() {
        let mode = AimMode::default();
        assert_eq!(mode.next(), AimMode::Keys);
        assert_eq!(mode.next().next(), AimMode::Auto);
        assert_eq!(mode.next().next().next(), AimMode::Pointer);
    }

    #[test]
    fn timed_buff_expires_once() {
        let mut timer = BuffTimer::Timed(0.05);
        assert!(!timer.tick(0.03));
        assert!(timer.tick(0.03));
        assert_eq!(timer, BuffTimer::Inactive);
        assert!(!timer.tick(0.03));
    }

    #[test]
    fn permanent_buff_survives_refresh_and_ticks() {
        let mut timer = BuffTimer::Permanent;
        timer.refresh(10.0);
        assert!(!timer.tick(100.0));
        assert_eq!(timer, BuffTimer::Permanent);
    }

    #[test]
    fn super_power_cycle() {
        let mut power = SuperPower::default();
        assert!(power.activate(10.0, 2.0));
        assert!(!power.activate(10.0, 2.0));

        power.tick(1.0);
        assert!(power.active);
        assert!((power.elapsed() - 1.0).abs() < 1e-6);

        power.tick(1.5);
        assert!(!power.active);
        assert!(!power.ready);

        power.tick(8.0);
        assert!(power.ready);
    }
}
