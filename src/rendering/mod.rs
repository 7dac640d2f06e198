//! Rendering module - drawing surface, camera, and scene dressing.

mod camera;
mod canvas;
mod plugin;
mod textures;
pub mod visual_config;

pub use camera::ChaseCamera;
pub use canvas::{Canvas, DrawCall, RecordingCanvas};
pub use plugin::RenderingPlugin;
pub use textures::{locate_asset, CelestialMesh};
pub use visual_config::VisualConfig;
