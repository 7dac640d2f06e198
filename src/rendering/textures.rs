//! Textured meshes for the celestial bodies.
//!
//! Texture files are optional. A body whose texture is missing is rendered
//! with its flat color and the fallback is logged once at startup.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::visual_config::VisualConfig;
use crate::core::AssetError;
use crate::world::{CelestialBody, GameWorld};

/// Root the asset server resolves relative paths against.
const ASSET_ROOT: &str = "assets";

/// Links a mesh entity to the body at this index in `GameWorld::bodies`.
#[derive(Component)]
pub struct CelestialMesh(pub usize);

/// Check that an asset file exists before handing its path to the loader.
pub fn locate_asset(relative: &str) -> Result<String, AssetError> {
    locate_asset_in(Path::new(ASSET_ROOT), relative)
}

fn locate_asset_in(root: &Path, relative: &str) -> Result<String, AssetError> {
    let full = root.join(relative);
    match fs::metadata(&full) {
        Ok(meta) if meta.is_file() && meta.len() == 0 => Err(AssetError::Empty(full.display().to_string())),
        Ok(meta) if meta.is_file() => Ok(relative.to_string()),
        _ => Err(AssetError::Missing(full.display().to_string())),
    }
}

/// Material for one body: its texture when available, else its flat color.
fn body_material(body: &CelestialBody, asset_server: &AssetServer) -> StandardMaterial {
    let emissive = if body.orbits() {
        LinearRgba::BLACK
    } else {
        body.color.to_linear() * 2.0
    };

    match locate_asset(&body.texture_path()) {
        Ok(path) => {
            debug!("Using texture {} for {}", path, body.name);
            StandardMaterial {
                base_color_texture: Some(asset_server.load(path)),
                emissive,
                ..default()
            }
        }
        Err(e) => {
            warn!("{}. Drawing {} with a flat color.", e, body.name);
            StandardMaterial {
                base_color: body.color,
                emissive,
                perceptual_roughness: 0.8,
                ..default()
            }
        }
    }
}

pub fn spawn_celestial_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut world: ResMut<GameWorld>,
    visual: Res<VisualConfig>,
) {
    if !visual.planet_meshes {
        return;
    }
    world.meshed_bodies = true;

    for (index, body) in world.bodies.iter().enumerate() {
        commands.spawn((
            CelestialMesh(index),
            Mesh3d(meshes.add(Sphere::new(body.radius).mesh().uv(32, 18))),
            MeshMaterial3d(materials.add(body_material(body, &asset_server))),
            Transform::from_translation(body.position()).with_rotation(body.spin()),
        ));
    }
}

/// Keep the meshes on their bodies' orbits.
pub fn sync_celestial_meshes(world: Res<GameWorld>, mut query: Query<(&CelestialMesh, &mut Transform)>) {
    for (mesh, mut transform) in query.iter_mut() {
        if let Some(body) = world.bodies.get(mesh.0) {
            transform.translation = body.position();
            transform.rotation = body.spin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_is_reported() {
        let result = locate_asset("textures/does_not_exist.png");
        assert!(matches!(result, Err(AssetError::Missing(_))));
    }

    #[test]
    fn empty_and_present_files() {
        let root = std::env::temp_dir().join("orbital_shooter_assets");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("blank.png"), b"").unwrap();
        fs::write(root.join("earth.png"), b"not really a png").unwrap();

        assert!(matches!(locate_asset_in(&root, "blank.png"), Err(AssetError::Empty(_))));
        assert_eq!(locate_asset_in(&root, "earth.png").unwrap(), "earth.png");
        // Directories are not assets
        assert!(matches!(locate_asset_in(&root, ""), Err(AssetError::Missing(_))));

        let _ = fs::remove_dir_all(root);
    }
}
