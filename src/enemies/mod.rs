//! Enemies module - enemy kinds, pursuit, and spawning.

mod ai;
mod components;
pub mod spawning;

pub use components::*;
pub use spawning::{ring_point, spawn_boss, spawn_enemy, SPAWN_ALTITUDE};
