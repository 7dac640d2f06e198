//! Gameplay tuning loaded from an external RON file.
//!
//! The balance knobs (movement, survival, firing rates, scoring, waves) are
//! tweakable without recompilation. Per-entity geometry such as spawn rings,
//! projectile and bomb shapes stays as constants next to the entity that
//! owns it. Fields missing from the file keep their built-in defaults.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Location of the gameplay tuning file.
pub const GAME_CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Gameplay configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Player movement (per reference frame)
    pub player_speed: f32,
    pub speed_boost: f32,
    pub planar_damping: f32,
    pub gravity: f32,
    pub float_force: f32,
    pub float_floor: f32,
    pub float_ceiling: f32,
    pub spawn_point: (f32, f32, f32),
    pub player_radius: f32,
    // Player survival
    pub starting_lives: u32,
    pub max_lives: u32,
    pub cheat_lives: u32,
    pub invincibility_duration: f32,
    // Firing
    pub projectile_speed: f32,
    pub auto_fire_delay: f32,
    pub bomb_delay: f32,
    pub multishot_extra: usize,
    // Super power
    pub super_power_cooldown: f32,
    pub super_power_duration: f32,
    pub super_power_boss_damage: i32,
    pub super_power_particles: usize,
    // Power-ups
    pub powerup_duration: f32,
    pub powerup_chance: f32,
    // Scoring
    pub score_per_hit: u32,
    pub boss_bonus: u32,
    pub boss_spawn_score: u32,
    pub combo_timeout: f32,
    // Waves
    pub wave_duration: f32,
    pub base_spawn_rate: f32,
    pub spawn_rate_step: f32,
    pub max_spawn_rate: f32,
    pub base_max_enemies: usize,
    pub max_enemies_step: usize,
    pub max_enemies_ceiling: usize,
    /// Fixed RNG seed for replayable runs (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 0.15,
            speed_boost: 1.5,
            planar_damping: 0.9,
            gravity: 0.0005,
            float_force: 0.001,
            float_floor: 5.0,
            float_ceiling: 30.0,
            spawn_point: (0.0, 0.0, 20.0),
            player_radius: 0.5,
            starting_lives: 3,
            max_lives: 10,
            cheat_lives: 999,
            invincibility_duration: 2.0,
            projectile_speed: 1.5,
            auto_fire_delay: 0.3,
            bomb_delay: 1.5,
            multishot_extra: 2,
            super_power_cooldown: 10.0,
            super_power_duration: 2.0,
            super_power_boss_damage: 5,
            super_power_particles: 100,
            powerup_duration: 10.0,
            powerup_chance: 0.1,
            score_per_hit: 100,
            boss_bonus: 1000,
            boss_spawn_score: 200,
            combo_timeout: 2.0,
            wave_duration: 30.0,
            base_spawn_rate: 0.01,
            spawn_rate_step: 0.005,
            max_spawn_rate: 0.05,
            base_max_enemies: 10,
            max_enemies_step: 2,
            max_enemies_ceiling: 20,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Player respawn point as a vector.
    pub fn spawn_point(&self) -> Vec3 {
        Vec3::new(self.spawn_point.0, self.spawn_point.1, self.spawn_point.2)
    }

    /// Load the gameplay config, falling back to defaults on any failure.
    pub fn load() -> Self {
        load_or_default(GAME_CONFIG_PATH)
    }
}

/// Read and parse a RON file into `T`.
pub fn read_ron_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(display));
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: display,
        details: e.to_string(),
    })
}

/// Load `T` from a RON file, logging and using `T::default()` when that fails.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &str) -> T {
    match read_ron_file(path) {
        Ok(config) => {
            info!("Loaded config from {}", path);
            config
        }
        Err(ConfigError::FileNotFound(_)) => {
            warn!("Could not find {}. Using defaults.", path);
            T::default()
        }
        Err(e) => {
            error!("{}. Using defaults.", e);
            T::default()
        }
    }
}
