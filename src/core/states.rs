//! Game state definitions that control the overall flow of the game.
//!
//! The simulation owns the authoritative game-over flag; the state mirrors
//! it so UI systems can use `OnEnter`/`OnExit` schedules.

use bevy::prelude::*;

/// Main game states.
///
/// - `Playing` while the player has lives left
/// - `GameOver` once the last life is gone, until a restart
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active gameplay
    #[default]
    Playing,
    /// Player has died
    GameOver,
}
