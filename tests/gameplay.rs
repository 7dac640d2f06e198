//! End-to-end scenarios driven through `GameWorld::update`.

use bevy::prelude::*;
use orbital_shooter::combat::{Projectile, WeaponKind};
use orbital_shooter::core::{GameConfig, GameEvent, FIXED_DT};
use orbital_shooter::enemies::{Enemy, EnemyKind};
use orbital_shooter::input::{GameKey, InputSnapshot};
use orbital_shooter::player::{AimMode, Buff, BuffTimer};
use orbital_shooter::rendering::RecordingCanvas;
use orbital_shooter::world::{GameWorld, PowerUpKind};

/// Config with all random spawning switched off.
fn quiet_config() -> GameConfig {
    GameConfig {
        base_spawn_rate: 0.0,
        spawn_rate_step: 0.0,
        max_spawn_rate: 0.0,
        ..GameConfig::default()
    }
}

fn idle() -> InputSnapshot {
    InputSnapshot::centered(Vec2::new(1200.0, 800.0))
}

fn run(world: &mut GameWorld, input: &InputSnapshot, steps: usize) {
    for _ in 0..steps {
        world.update(FIXED_DT, input);
    }
}

/// A stationary enemy a few units in front of the player along +x.
fn parked_enemy(world: &GameWorld, kind: EnemyKind) -> Enemy {
    let mut enemy = Enemy::new(kind, world.player.position + Vec3::X * 4.0, 0.1);
    enemy.speed = 0.0;
    enemy
}

fn laser_at(world: &GameWorld, target: Vec3) -> Projectile {
    Projectile::new(world.player.position, target, WeaponKind::Laser, world.config.projectile_speed)
}

#[test]
fn laser_volley_fans_three_shots() {
    let mut world = GameWorld::new(quiet_config(), 1);
    world.player.position = Vec3::ZERO;
    world.player.aim_mode = AimMode::Keys;

    world.update(FIXED_DT, &idle().with_held(&[GameKey::AimRight]).with_trigger());

    let shots = &world.player.projectiles;
    assert_eq!(shots.len(), 3);

    let mut angles: Vec<f32> = shots.iter().map(|shot| shot.direction.y.atan2(shot.direction.x)).collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    for (angle, expected) in angles.iter().zip([-0.05, 0.0, 0.05]) {
        assert!((angle - expected).abs() < 1e-4, "angle {} expected {}", angle, expected);
    }
    for shot in shots {
        assert!((shot.speed - 2.25).abs() < 1e-6);
        assert_eq!(shot.direction.z, 0.0);
    }
}

#[test]
fn enemy_dies_on_second_hit_and_scores_once() {
    let mut world = GameWorld::new(quiet_config(), 2);
    let enemy = parked_enemy(&world, EnemyKind::Normal);
    let target = enemy.position;
    world.enemies.push(enemy);

    let shot = laser_at(&world, target);
    world.player.projectiles.push(shot);
    world.update(FIXED_DT, &idle());
    assert_eq!(world.enemies.len(), 1);
    assert_eq!(world.enemies[0].health, 1);
    assert_eq!(world.player.score, 0);

    // Let the hit flash wear off
    run(&mut world, &idle(), 15);

    let shot = laser_at(&world, target);
    world.player.projectiles.push(shot);
    world.update(FIXED_DT, &idle());
    assert!(world.enemies.is_empty());
    assert_eq!(world.player.score, 100);

    run(&mut world, &idle(), 10);
    assert_eq!(world.player.score, 100);
    let kills = world
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, GameEvent::EnemyKilled { .. }))
        .count();
    assert_eq!(kills, 1);
}

#[test]
fn boss_spawns_at_threshold_and_pays_out() {
    let mut world = GameWorld::new(quiet_config(), 3);
    world.player.score = 200;

    world.update(FIXED_DT, &idle());

    let boss = world.boss.as_ref().expect("boss should spawn at 200 points");
    let planar = (boss.position - world.player.position).truncate().length();
    assert!((44.7..=45.1).contains(&planar), "boss spawned {} away", planar);
    assert!((boss.position.z - 20.0).abs() < 0.2);
    assert_eq!(world.director.next_boss_score, 400);
    assert!(world
        .drain_events()
        .iter()
        .any(|event| matches!(event, GameEvent::BossSpawned { .. })));

    // Bring the boss close and finish it with one laser hit
    let parked = parked_enemy(&world, EnemyKind::Boss);
    if let Some(boss) = world.boss.as_mut() {
        boss.position = parked.position;
        boss.speed = 0.0;
        boss.health = 1;
    }
    let shot = laser_at(&world, parked.position);
    world.player.projectiles.push(shot);
    world.update(FIXED_DT, &idle());

    assert!(world.boss.is_none());
    assert_eq!(world.player.score, 1200);
    assert_eq!(world.director.next_boss_score, 400);
    assert!(world.drain_events().contains(&GameEvent::BossDefeated));
}

#[test]
fn super_power_clears_the_arena_for_its_whole_duration() {
    // Keep the boss out of the way so only grunt kills score
    let config = GameConfig {
        boss_spawn_score: 100_000,
        ..quiet_config()
    };
    let mut world = GameWorld::new(config, 4);
    for i in 0..5 {
        let angle = i as f32;
        let offset = Vec3::new(angle.cos() * 30.0, angle.sin() * 30.0, 0.0);
        let mut enemy = Enemy::new(EnemyKind::Tank, world.player.position + offset, 0.1);
        enemy.speed = 0.0;
        world.enemies.push(enemy);
    }

    world.update(FIXED_DT, &idle().with_pressed(&[GameKey::SuperPower]));
    assert!(world.enemies.is_empty());
    assert_eq!(world.player.score, 500);
    assert!(world.player.super_power.active);

    // Halfway through, a newcomer is swept too
    run(&mut world, &idle(), 60);
    assert!(world.player.super_power.active);
    let late = parked_enemy(&world, EnemyKind::Fast);
    world.enemies.push(late);
    world.update(FIXED_DT, &idle());
    assert!(world.enemies.is_empty());
    assert_eq!(world.player.score, 600);

    run(&mut world, &idle(), 62);
    assert!(!world.player.super_power.active);
    assert!(!world.player.super_power.ready);

    // Pressing again during cooldown does nothing
    let straggler = parked_enemy(&world, EnemyKind::Tank);
    world.enemies.push(straggler);
    world.update(FIXED_DT, &idle().with_pressed(&[GameKey::SuperPower]));
    assert_eq!(world.enemies.len(), 1);
}

#[test]
fn cheat_toggle_round_trip() {
    let mut world = GameWorld::new(quiet_config(), 5);
    let config = world.config.clone();
    world.player.collect(PowerUpKind::Speed, &config);

    world.update(FIXED_DT, &idle().with_pressed(&[GameKey::ToggleCheat]));
    assert!(world.player.cheat_mode);
    assert_eq!(world.player.lives, 999);
    assert!(world.player.shield_active);
    assert_eq!(world.player.buff(Buff::Speed), BuffTimer::Permanent);

    world.update(FIXED_DT, &idle().with_pressed(&[GameKey::ToggleCheat]));
    assert!(!world.player.cheat_mode);
    assert_eq!(world.player.lives, 3);
    assert!(!world.player.shield_active);
    assert!(!world.player.auto_fire);
    let remaining = world.player.buff(Buff::Speed).remaining().unwrap_or_default();
    assert!((remaining - (10.0 - FIXED_DT)).abs() < 1e-4);
    assert_eq!(world.player.buff(Buff::Shield), BuffTimer::Inactive);

    let toggles: Vec<GameEvent> = world
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, GameEvent::CheatToggled { .. }))
        .collect();
    assert_eq!(
        toggles,
        vec![
            GameEvent::CheatToggled { enabled: true },
            GameEvent::CheatToggled { enabled: false }
        ]
    );
}

#[test]
fn invincibility_absorbs_follow_up_contacts() {
    let mut world = GameWorld::new(quiet_config(), 6);
    let here = world.player.position;
    world.enemies.push(Enemy::new(EnemyKind::Normal, here, 0.1));

    world.update(FIXED_DT, &idle());
    assert_eq!(world.player.lives, 2);
    assert!(world.player.invincibility > 0.0);

    let here = world.player.position;
    world.enemies.push(Enemy::new(EnemyKind::Tank, here, 0.1));
    run(&mut world, &idle(), 30);
    assert_eq!(world.player.lives, 2);
}

#[test]
fn losing_the_last_life_ends_the_game() {
    let config = GameConfig {
        starting_lives: 1,
        ..quiet_config()
    };
    let mut world = GameWorld::new(config, 7);
    let here = world.player.position;
    world.enemies.push(Enemy::new(EnemyKind::Normal, here, 0.1));

    world.update(FIXED_DT, &idle());
    assert!(world.game_over);
    assert!(world.player.dead);
    assert!(world.drain_events().contains(&GameEvent::PlayerDied));

    world.update(FIXED_DT, &idle().with_pressed(&[GameKey::Restart]));
    assert!(!world.game_over);
    assert_eq!(world.player.lives, 1);
    assert!(world.enemies.is_empty());
}

#[test]
fn waves_only_ever_get_harder() {
    let config = GameConfig {
        wave_duration: 0.5,
        ..GameConfig::default()
    };
    let mut world = GameWorld::new(config, 8);
    let cheat = world.config.clone();
    world.player.toggle_cheat(&cheat);

    let mut last = world.director.difficulty;
    for _ in 0..900 {
        world.update(FIXED_DT, &idle());
        let now = world.director.difficulty;
        assert!(now.spawn_rate >= last.spawn_rate);
        assert!(now.max_enemies >= last.max_enemies);
        assert!(now.spawn_rate <= 0.05 + 1e-6);
        assert!(now.max_enemies <= 20);
        assert!(world.enemies.len() <= 20);
        last = now;
    }
    assert!(world.director.wave >= 20);
    assert!((last.spawn_rate - 0.05).abs() < 1e-6);
    assert_eq!(last.max_enemies, 20);
}

#[test]
fn same_seed_same_game() {
    let inputs = [
        idle().with_held(&[GameKey::MoveForward]),
        idle().with_pointer(Vec2::new(900.0, 300.0)).with_trigger(),
        idle().with_held(&[GameKey::MoveLeft, GameKey::Ascend]).with_trigger(),
        idle().with_pressed(&[GameKey::CycleAim]),
    ];
    let config = GameConfig {
        base_spawn_rate: 0.2,
        max_spawn_rate: 0.3,
        ..GameConfig::default()
    };

    let mut a = GameWorld::new(config.clone(), 42);
    let mut b = GameWorld::new(config, 42);
    for step in 0..600 {
        let input = &inputs[(step / 20) % inputs.len()];
        a.update(FIXED_DT, input);
        b.update(FIXED_DT, input);
    }

    assert_eq!(a.player.position, b.player.position);
    assert_eq!(a.hud(), b.hud());
    assert_eq!(a.enemies.len(), b.enemies.len());
    for (x, y) in a.enemies.iter().zip(&b.enemies) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.health, y.health);
    }
    assert_eq!(a.particles.len(), b.particles.len());
}

#[test]
fn drawing_leaves_the_world_untouched() {
    let mut world = GameWorld::new(GameConfig::default(), 9);
    run(&mut world, &idle().with_held(&[GameKey::MoveRight]), 30);
    let before = world.hud();
    let position = world.player.position;

    let mut first = RecordingCanvas::default();
    let mut second = RecordingCanvas::default();
    world.draw(&mut first);
    world.draw(&mut second);

    assert_eq!(first.calls, second.calls);
    assert_eq!(world.hud(), before);
    assert_eq!(world.player.position, position);
}
