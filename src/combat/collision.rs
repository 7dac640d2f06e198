//! Collision and scoring pass over the whole world.
//!
//! Runs after everything has moved. Every phase marks what it hits and
//! sweeps afterwards, so no collection is mutated while it is iterated.

use bevy::prelude::*;

use super::projectiles::{BOMB_BOSS_DAMAGE, BOMB_ENEMY_DAMAGE};
use crate::core::GameEvent;
use crate::enemies::{Enemy, EnemyKind};
use crate::player::DamageOutcome;
use crate::world::{spawn_explosion, GameWorld, PowerUp, BURST_COLOR};

/// Pickups, contact damage, projectile hits and bomb blasts, in that order.
pub(crate) fn resolve(w: &mut GameWorld) {
    resolve_pickups(w);
    resolve_contacts(w);
    resolve_projectile_hits(w);
    resolve_bomb_blasts(w);
}

pub(crate) fn resolve_pickups(w: &mut GameWorld) {
    let player_position = w.player.position;
    let radius = w.player.radius;

    let mut collected: Vec<PowerUp> = Vec::new();
    w.powerups.retain(|powerup| {
        if powerup.touches(player_position, radius) {
            collected.push(powerup.clone());
            false
        } else {
            true
        }
    });

    for powerup in collected {
        w.player.collect(powerup.kind, &w.config);
        spawn_explosion(&mut w.particles, &mut w.rng, powerup.position, powerup.kind.color());
        w.events.push(GameEvent::PowerUpCollected { kind: powerup.kind });
    }
}

pub(crate) fn resolve_contacts(w: &mut GameWorld) {
    let player_position = w.player.position;
    let player_radius = w.player.radius;
    let mut outcomes = Vec::new();

    // Each touching enemy is spent; the first real hit makes the player
    // invincible so later ones in the same frame pass through harmlessly.
    let player = &mut w.player;
    let config = &w.config;
    w.enemies.retain(|enemy| {
        if !player.is_vulnerable() || !touches_player(enemy, player_position, player_radius) {
            return true;
        }
        outcomes.push(player.take_damage(config));
        false
    });

    if let Some(boss) = &w.boss {
        if w.player.is_vulnerable() && touches_player(boss, w.player.position, player_radius) {
            outcomes.push(w.player.take_damage(&w.config));
        }
    }

    for outcome in outcomes {
        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Hit { lives_left } => w.events.push(GameEvent::PlayerHit { lives_left }),
            DamageOutcome::Killed => w.events.push(GameEvent::PlayerDied),
        }
    }
}

fn touches_player(enemy: &Enemy, player_position: Vec3, player_radius: f32) -> bool {
    enemy.position.distance(player_position) < enemy.radius + player_radius
}

/// Each projectile lands on at most one enemy, and tests the boss separately.
pub(crate) fn resolve_projectile_hits(w: &mut GameWorld) {
    for projectile in w.player.projectiles.iter_mut() {
        if !projectile.active {
            continue;
        }

        if let Some(enemy) = w
            .enemies
            .iter_mut()
            .find(|enemy| enemy.can_be_hit() && projectile.hits(enemy.position, enemy.radius))
        {
            enemy.strike(projectile.damage());
            projectile.consume();
        }

        if let Some(boss) = w.boss.as_mut() {
            if boss.can_be_hit() && projectile.hits(boss.position, boss.radius) {
                boss.strike(projectile.damage());
                projectile.consume();
            }
        }
    }

    w.player.projectiles.retain(|projectile| projectile.active);
    sweep_casualties(w);
}

/// Area damage on every frame a blast lingers.
pub(crate) fn resolve_bomb_blasts(w: &mut GameWorld) {
    for bomb in w.player.bombs.iter_mut() {
        if !bomb.is_detonated() {
            continue;
        }
        if bomb.take_detonation() {
            w.events.push(GameEvent::BombDetonated {
                position: bomb.position,
            });
        }

        for enemy in w.enemies.iter_mut().filter(|enemy| !enemy.is_dead()) {
            if bomb.in_blast(enemy.position) {
                enemy.apply_damage(BOMB_ENEMY_DAMAGE);
            }
        }
        if let Some(boss) = w.boss.as_mut() {
            if !boss.is_dead() && bomb.in_blast(boss.position) {
                boss.apply_damage(BOMB_BOSS_DAMAGE);
            }
        }
    }

    sweep_casualties(w);
}

/// While the super power is active every enemy dies and the boss bleeds.
pub(crate) fn resolve_super_power(w: &mut GameWorld) {
    if !w.player.super_power.active {
        return;
    }

    for enemy in std::mem::take(&mut w.enemies) {
        award_kill(w, enemy.kind, enemy.position, BURST_COLOR);
    }

    let damage = w.config.super_power_boss_damage;
    if let Some(boss) = w.boss.as_mut() {
        boss.apply_damage(damage);
        let position = boss.position;
        spawn_explosion(&mut w.particles, &mut w.rng, position, BURST_COLOR);
    }
    sweep_casualties(w);
}

/// Remove dead enemies and a dead boss, scoring each.
fn sweep_casualties(w: &mut GameWorld) {
    let mut fallen = Vec::new();
    w.enemies.retain(|enemy| {
        if enemy.is_dead() {
            fallen.push((enemy.kind, enemy.position));
            false
        } else {
            true
        }
    });

    for (kind, position) in fallen {
        award_kill(w, kind, position, kind.profile().color);
    }

    if w.boss.as_ref().is_some_and(Enemy::is_dead) {
        if let Some(boss) = w.boss.take() {
            defeat_boss(w, boss.position);
        }
    }
}

fn award_kill(w: &mut GameWorld, kind: EnemyKind, position: Vec3, color: Color) {
    w.player.score += w.config.score_per_hit;
    w.player.register_kill();
    spawn_explosion(&mut w.particles, &mut w.rng, position, color);
    w.events.push(GameEvent::EnemyKilled { kind, position });
}

fn defeat_boss(w: &mut GameWorld, position: Vec3) {
    w.player.score += w.config.boss_bonus;
    w.player.register_kill();
    spawn_explosion(&mut w.particles, &mut w.rng, position, EnemyKind::Boss.profile().color);
    w.events.push(GameEvent::BossDefeated);
}
