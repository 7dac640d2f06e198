//! Input module - the read-only input snapshot the simulation consumes.

mod plugin;
mod snapshot;

pub use plugin::{CurrentInput, InputLatch, InputPlugin, InputSet};
pub use snapshot::{GameKey, InputSnapshot};
