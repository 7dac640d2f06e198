//! Player module - player state, aim resolution, and the controller.

mod aim;
mod components;
mod controller;

pub use aim::resolve_aim;
pub use components::{AimMode, Buff, BuffTimer, Buffs, DamageOutcome, PlayerState, SuperPower};
pub use controller::{Player, AIM_REACH};
