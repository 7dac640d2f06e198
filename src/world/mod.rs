//! World module - the simulation root and everything that lives in it.

mod director;
mod game_world;
mod orbits;
mod particles;
mod pickups;
mod plugin;

pub use director::{Difficulty, WaveDirector};
pub use game_world::{GameWorld, HudSnapshot, MinimapBlip};
pub use orbits::{solar_system, CelestialBody};
pub use particles::{spawn_burst, spawn_explosion, Particle, BURST_COLOR, EXPLOSION_PARTICLES};
pub use pickups::{PowerUp, PowerUpKind, PICKUP_MARGIN};
pub use plugin::{SimulationPlugin, SimulationSet};
