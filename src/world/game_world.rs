//! The simulation root: owns every entity and steps them in a fixed order.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::director::WaveDirector;
use super::orbits::{solar_system, CelestialBody};
use super::particles::Particle;
use super::pickups::PowerUp;
use crate::combat::{collision, WeaponKind};
use crate::core::{advance_and_prune, GameConfig, GameEvent};
use crate::enemies::{spawn_boss, spawn_enemy, Enemy, EnemyKind};
use crate::input::{GameKey, InputSnapshot};
use crate::player::{AimMode, Player};
use crate::rendering::Canvas;

/// Read-only numbers the HUD shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u32,
    pub wave: u32,
    pub boss_health: Option<i32>,
    pub aim_mode: AimMode,
    pub weapon: WeaponKind,
    pub super_ready: bool,
    /// Seconds until the super power is ready again
    pub super_cooldown: f32,
    pub super_active: bool,
    pub cheat_mode: bool,
    pub combo: u32,
    pub kills: u32,
    pub game_over: bool,
}

/// Enemy position on the minimap, relative to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapBlip {
    pub offset: Vec2,
    pub kind: EnemyKind,
}

/// Whole game state. Plain data, stepped by `update` and drawn by `draw`.
#[derive(Resource)]
pub struct GameWorld {
    pub config: GameConfig,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub boss: Option<Enemy>,
    pub powerups: Vec<PowerUp>,
    /// Explosion debris not owned by the player
    pub particles: Vec<Particle>,
    pub bodies: Vec<CelestialBody>,
    pub director: WaveDirector,
    pub game_over: bool,
    /// Speed multiplier for the orbits
    pub time_scale: f32,
    /// Bodies have lit meshes of their own, so `draw` only traces their orbits
    pub meshed_bodies: bool,
    pub(crate) rng: StdRng,
    pub(crate) events: Vec<GameEvent>,
}

impl GameWorld {
    /// Fresh world with a deterministic random stream.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bodies = solar_system(&mut rng);

        Self {
            player: Player::new(&config),
            enemies: Vec::new(),
            boss: None,
            powerups: Vec::new(),
            particles: Vec::new(),
            bodies,
            director: WaveDirector::new(&config),
            game_over: false,
            time_scale: 1.0,
            meshed_bodies: false,
            rng,
            events: Vec::new(),
            config,
        }
    }

    /// World seeded from the config, or from entropy when no seed is set.
    pub fn from_config(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!("Starting world with seed {}", seed);
        Self::new(config, seed)
    }

    /// Advance the game by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) {
        if self.game_over {
            if input.just_pressed(GameKey::Restart) {
                self.restart();
            }
            return;
        }

        if let Some(wave) = self.director.tick(dt, &self.config) {
            self.events.push(GameEvent::WaveAdvanced { wave });
        }

        advance_and_prune(&mut self.particles, dt);
        for body in &mut self.bodies {
            body.update(dt * self.time_scale);
        }

        // Sampled before enemies pursue, while auto aim measures from the
        // player's already moved position.
        let hostiles: Vec<Vec3> = self
            .enemies
            .iter()
            .chain(self.boss.iter())
            .map(|enemy| enemy.position)
            .collect();
        self.player
            .update(dt, input, &hostiles, &self.config, &mut self.rng, &mut self.events);

        if self.director.roll_spawn(self.enemies.len(), &mut self.rng) {
            let enemy = spawn_enemy(&mut self.rng);
            self.enemies.push(enemy);
        }

        if self.director.boss_due(self.player.score, self.boss.is_some()) {
            let boss = spawn_boss(&mut self.rng, self.player.position);
            self.events.push(GameEvent::BossSpawned {
                position: boss.position,
            });
            self.boss = Some(boss);
            self.director.boss_spawned(&self.config);
        }

        let target = self.player.position;
        for enemy in self.enemies.iter_mut().chain(self.boss.iter_mut()) {
            enemy.pursue(target, dt);
        }

        collision::resolve(self);

        // Power-ups share the enemy spawn roll, then need their own chance
        if self.director.roll_spawn(self.enemies.len(), &mut self.rng)
            && self.rng.gen::<f32>() < self.config.powerup_chance
        {
            let powerup = PowerUp::spawn_near(&mut self.rng, self.player.position);
            self.powerups.push(powerup);
        }

        collision::resolve_super_power(self);

        if self.player.dead {
            self.game_over = true;
        }
    }

    /// Reset everything but the config and the random stream.
    pub fn restart(&mut self) {
        self.player = Player::new(&self.config);
        self.enemies.clear();
        self.boss = None;
        self.powerups.clear();
        self.particles.clear();
        self.director = WaveDirector::new(&self.config);
        self.game_over = false;
        self.events.push(GameEvent::Restarted);
    }

    /// Describe the whole scene to `canvas`. Never mutates the world.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for body in &self.bodies {
            if self.meshed_bodies {
                body.draw_orbit(canvas);
            } else {
                body.draw(canvas);
            }
        }
        self.player.draw(canvas);
        for enemy in self.enemies.iter().chain(self.boss.iter()) {
            enemy.draw(canvas);
        }
        for powerup in &self.powerups {
            powerup.draw(canvas);
        }
        for particle in &self.particles {
            particle.draw(canvas);
        }
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn hud(&self) -> HudSnapshot {
        let player = &self.player;
        HudSnapshot {
            score: player.score,
            lives: player.lives,
            wave: self.director.wave,
            boss_health: self.boss.as_ref().map(|boss| boss.health),
            aim_mode: player.aim_mode,
            weapon: player.weapon,
            super_ready: player.super_power.ready,
            super_cooldown: player.super_power.cooldown.max(0.0),
            super_active: player.super_power.active,
            cheat_mode: player.cheat_mode,
            combo: player.combo,
            kills: player.kills,
            game_over: self.game_over,
        }
    }

    /// Enemy and boss offsets from the player in the XY plane, times `scale`.
    pub fn minimap_blips(&self, scale: f32) -> Vec<MinimapBlip> {
        let center = self.player.position.truncate();
        self.enemies
            .iter()
            .chain(self.boss.iter())
            .map(|enemy| MinimapBlip {
                offset: (enemy.position.truncate() - center) * scale,
                kind: enemy.kind,
            })
            .collect()
    }
}
