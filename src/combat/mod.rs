//! Combat module - weapons, projectiles, bombs, and the collision pass.

pub(crate) mod collision;
mod projectiles;
mod weapons;

pub use projectiles::*;
pub use weapons::{spread_directions, WeaponKind, WeaponStats};
