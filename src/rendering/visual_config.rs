//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking camera, lighting and HUD layout without recompilation.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::load_or_default;

pub const VISUAL_CONFIG_PATH: &str = "assets/data/visual_config.ron";

/// Visual configuration loaded from assets/data/visual_config.ron.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Scene
    pub clear_color: (f32, f32, f32),
    pub ambient_color: (f32, f32, f32),
    pub ambient_brightness: f32,
    pub sun_light_intensity: f32,
    pub sun_light_range: f32,
    /// Render the celestial bodies as lit meshes under the gizmo outlines
    pub planet_meshes: bool,
    // Chase camera
    pub camera_offset: (f32, f32, f32),
    pub camera_smoothing: f32,
    // HUD
    pub minimap_scale: f32,
    pub minimap_size: f32,
    pub crosshair_size: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            clear_color: (0.0, 0.0, 0.02),
            ambient_color: (1.0, 1.0, 1.0),
            ambient_brightness: 200.0,
            sun_light_intensity: 4_000_000.0,
            sun_light_range: 200.0,
            planet_meshes: true,
            camera_offset: (-20.0, -20.0, 10.0),
            camera_smoothing: 8.0,
            minimap_scale: 0.25,
            minimap_size: 160.0,
            crosshair_size: 20.0,
        }
    }
}

impl VisualConfig {
    /// Load visual config from RON file, falling back to defaults.
    pub fn load() -> Self {
        load_or_default(VISUAL_CONFIG_PATH)
    }

    pub fn clear_color(&self) -> Color {
        Color::srgb(self.clear_color.0, self.clear_color.1, self.clear_color.2)
    }

    pub fn ambient_color(&self) -> Color {
        Color::srgb(self.ambient_color.0, self.ambient_color.1, self.ambient_color.2)
    }

    pub fn camera_offset(&self) -> Vec3 {
        Vec3::new(self.camera_offset.0, self.camera_offset.1, self.camera_offset.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chase_camera_layout() {
        let config = VisualConfig::default();
        assert_eq!(config.camera_offset(), Vec3::new(-20.0, -20.0, 10.0));
        assert_eq!(config.minimap_scale, 0.25);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let config: VisualConfig = ron::from_str("(minimap_scale: 0.5, planet_meshes: false)").unwrap();
        assert_eq!(config.minimap_scale, 0.5);
        assert!(!config.planet_meshes);
        assert_eq!(config.camera_smoothing, 8.0);
    }
}
