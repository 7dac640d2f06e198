//! UI module - HUD, minimap, crosshair, and the game-over screen.

mod hud;
mod plugin;

pub use hud::{blip_pixel, status_lines};
pub use plugin::UiPlugin;
