//! Core module - config, errors, events, states, and the motion contract.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod error;
mod events;
pub mod kinematic;
mod plugin;
mod states;
mod tween;

pub use config::{load_or_default, read_ron_file, GameConfig, GAME_CONFIG_PATH};
pub use error::{AssetError, ConfigError};
pub use events::GameEvent;
pub use kinematic::{advance_and_prune, frame_scale, heading, Kinematic, FIXED_DT};
pub use plugin::CorePlugin;
pub use states::GameState;
pub use tween::SmoothFollow;
