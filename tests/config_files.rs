//! The shipped data files must parse and match the built-in defaults.

use orbital_shooter::core::{read_ron_file, GameConfig, GAME_CONFIG_PATH};
use orbital_shooter::rendering::visual_config::VISUAL_CONFIG_PATH;
use orbital_shooter::rendering::VisualConfig;

#[test]
fn game_config_file_parses() {
    let config: GameConfig = read_ron_file(GAME_CONFIG_PATH).expect("game config should parse");
    let defaults = GameConfig::default();

    assert_eq!(config.player_speed, defaults.player_speed);
    assert_eq!(config.starting_lives, defaults.starting_lives);
    assert_eq!(config.boss_spawn_score, defaults.boss_spawn_score);
    assert_eq!(config.max_enemies_ceiling, defaults.max_enemies_ceiling);
    assert_eq!(config.seed, None);
}

#[test]
fn visual_config_file_parses() {
    let config: VisualConfig = read_ron_file(VISUAL_CONFIG_PATH).expect("visual config should parse");
    assert_eq!(config.camera_offset, (-20.0, -20.0, 10.0));
    assert_eq!(config.minimap_scale, 0.25);
}
