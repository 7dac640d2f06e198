//! The player: movement, firing, power-ups and survival.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use super::aim::resolve_aim;
use super::components::*;
use crate::combat::{spread_directions, Bomb, Projectile, WeaponKind};
use crate::core::{advance_and_prune, frame_scale, GameConfig, GameEvent};
use crate::input::{GameKey, InputSnapshot};
use crate::rendering::Canvas;
use crate::world::{spawn_burst, Particle, PowerUpKind};

/// How far ahead of the player a shot's target point is placed.
pub const AIM_REACH: f32 = 100.0;

const BODY_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const FLASH_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
const SHIELD_COLOR: Color = Color::srgba(0.0, 0.5, 1.0, 0.3);
const SUPER_COLOR: Color = Color::srgba(1.0, 0.8, 0.0, 0.3);

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Units per reference frame
    pub velocity: Vec3,
    pub radius: f32,
    pub lives: u32,
    pub score: u32,
    pub weapon: WeaponKind,
    pub is_floating: bool,
    /// Seconds of invincibility left
    pub invincibility: f32,
    pub dead: bool,
    pub cheat_mode: bool,
    pub auto_fire: bool,
    pub aim_mode: AimMode,
    pub buffs: Buffs,
    pub shield_active: bool,
    pub combo: u32,
    pub kills: u32,
    pub super_power: SuperPower,
    pub projectiles: Vec<Projectile>,
    pub bombs: Vec<Bomb>,
    pub particles: Vec<Particle>,
    /// Seconds since spawn, the time base for every cooldown
    clock: f32,
    last_shot: HashMap<WeaponKind, f32>,
    last_auto_fire: Option<f32>,
    last_bomb: Option<f32>,
    last_kill: f32,
    cheat_backup: Option<CheatBackup>,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.spawn_point(),
            velocity: Vec3::ZERO,
            radius: config.player_radius,
            lives: config.starting_lives,
            score: 0,
            weapon: WeaponKind::default(),
            is_floating: true,
            invincibility: 0.0,
            dead: false,
            cheat_mode: false,
            auto_fire: false,
            aim_mode: AimMode::default(),
            buffs: Buff::ALL.into_iter().map(|buff| (buff, BuffTimer::Inactive)).collect(),
            shield_active: false,
            combo: 0,
            kills: 0,
            super_power: SuperPower::default(),
            projectiles: Vec::new(),
            bombs: Vec::new(),
            particles: Vec::new(),
            clock: 0.0,
            last_shot: HashMap::new(),
            last_auto_fire: None,
            last_bomb: None,
            last_kill: 0.0,
            cheat_backup: None,
        }
    }

    pub fn state(&self) -> PlayerState {
        if self.dead {
            PlayerState::Dead
        } else if self.invincibility > 0.0 {
            PlayerState::Invincible
        } else {
            PlayerState::Alive
        }
    }

    /// Contact damage only applies to a living, non-invincible player.
    pub fn is_vulnerable(&self) -> bool {
        self.state() == PlayerState::Alive
    }

    pub fn buff(&self, buff: Buff) -> BuffTimer {
        self.buffs.get(&buff).copied().unwrap_or_default()
    }

    /// Step the player by `dt` seconds.
    ///
    /// `hostiles` are the positions auto aim may lock onto: enemies in order,
    /// then the boss.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        hostiles: &[Vec3],
        config: &GameConfig,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) {
        if self.dead {
            return;
        }
        self.clock += dt;
        let frames = frame_scale(dt);

        self.super_power.tick(dt);
        if input.just_pressed(GameKey::SuperPower)
            && self
                .super_power
                .activate(config.super_power_cooldown, config.super_power_duration)
        {
            spawn_burst(&mut self.particles, rng, self.position, config.super_power_particles);
            events.push(GameEvent::SuperPowerActivated);
        }

        if input.just_pressed(GameKey::ToggleCheat) {
            self.toggle_cheat(config);
            events.push(GameEvent::CheatToggled {
                enabled: self.cheat_mode,
            });
        }

        if input.just_pressed(GameKey::CycleAim) {
            self.aim_mode = self.aim_mode.next();
        }

        if self.is_floating {
            self.velocity.z -= config.gravity * frames;
            if self.position.z < config.float_floor {
                self.velocity.z += config.float_force * frames;
            }
            if self.position.z > config.float_ceiling {
                self.velocity.z -= config.float_force * frames;
            }
        }

        self.position += self.velocity * frames;

        self.steer(input, config, frames);

        for (slot, key) in GameKey::WEAPON_SLOTS.iter().enumerate() {
            if input.held(*key) {
                if let Some(weapon) = WeaponKind::from_slot(slot) {
                    self.weapon = weapon;
                }
            }
        }

        if self.invincibility > 0.0 {
            self.invincibility = (self.invincibility - dt).max(0.0);
        }

        self.handle_firing(input, hostiles, config, events);

        advance_and_prune(&mut self.projectiles, dt);
        advance_and_prune(&mut self.bombs, dt);

        for (buff, timer) in self.buffs.iter_mut() {
            if timer.tick(dt) && *buff == Buff::Shield {
                self.shield_active = false;
            }
        }

        if self.clock - self.last_kill > config.combo_timeout {
            self.combo = 0;
        }

        advance_and_prune(&mut self.particles, dt);
    }

    /// Planar keys set the speed directly, released axes coast to a stop.
    /// Opposite keys: left beats right, forward beats back, descend beats ascend.
    fn steer(&mut self, input: &InputSnapshot, config: &GameConfig, frames: f32) {
        let boost = if self.buff(Buff::Speed).is_active() {
            config.speed_boost
        } else {
            1.0
        };
        let speed = config.player_speed * boost;
        let damping = config.planar_damping.powf(frames);

        self.velocity.x = if input.held(GameKey::MoveLeft) {
            -speed
        } else if input.held(GameKey::MoveRight) {
            speed
        } else {
            self.velocity.x * damping
        };

        self.velocity.y = if input.held(GameKey::MoveForward) {
            speed
        } else if input.held(GameKey::MoveBack) {
            -speed
        } else {
            self.velocity.y * damping
        };

        if input.held(GameKey::Ascend) {
            self.velocity.z = config.player_speed;
        }
        if input.held(GameKey::Descend) {
            self.velocity.z = -config.player_speed;
        }
    }

    fn handle_firing(
        &mut self,
        input: &InputSnapshot,
        hostiles: &[Vec3],
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) {
        let auto_ready = self.auto_fire && elapsed(self.last_auto_fire, self.clock, config.auto_fire_delay);
        let weapon_ready = elapsed(
            self.last_shot.get(&self.weapon).copied(),
            self.clock,
            self.weapon.stats().cooldown,
        );

        if (input.primary || auto_ready) && weapon_ready {
            let aim = resolve_aim(self.aim_mode, input, self.position, hostiles.iter().copied());
            let count = self.fire(aim, config);
            if count > 0 {
                events.push(GameEvent::ShotFired {
                    weapon: self.weapon,
                    count,
                });
            }
        }

        let wants_bomb = input.held(GameKey::ThrowBomb) || input.secondary;
        if wants_bomb && elapsed(self.last_bomb, self.clock, config.bomb_delay) {
            let aim = resolve_aim(self.aim_mode, input, self.position, hostiles.iter().copied());
            if aim != Vec3::ZERO {
                self.bombs
                    .push(Bomb::new(self.position, self.position + aim * AIM_REACH, config.projectile_speed));
                self.last_bomb = Some(self.clock);
                events.push(GameEvent::BombThrown);
            }
        }
    }

    /// Fire the active weapon along `aim`. Returns the number of shots.
    ///
    /// A zero aim fires nothing and leaves every cooldown untouched.
    pub fn fire(&mut self, aim: Vec3, config: &GameConfig) -> usize {
        if aim == Vec3::ZERO {
            return 0;
        }

        let stats = self.weapon.stats();
        let mut shots = self.weapon.base_shots();
        if self.weapon.fans_out() && self.buff(Buff::Multishot).is_active() {
            shots += config.multishot_extra;
        }

        for direction in spread_directions(aim, shots, stats.spread) {
            let target = self.position + direction * AIM_REACH;
            self.projectiles
                .push(Projectile::new(self.position, target, self.weapon, config.projectile_speed));
        }

        self.last_shot.insert(self.weapon, self.clock);
        if self.auto_fire {
            self.last_auto_fire = Some(self.clock);
        }
        shots
    }

    /// Lose a life unless invincible or cheating.
    pub fn take_damage(&mut self, config: &GameConfig) -> DamageOutcome {
        if self.dead || self.cheat_mode || self.invincibility > 0.0 {
            return DamageOutcome::Ignored;
        }
        debug_assert!(self.lives > 0, "living player without lives");

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.dead = true;
            return DamageOutcome::Killed;
        }

        self.invincibility = config.invincibility_duration;
        self.position = config.spawn_point();
        DamageOutcome::Hit {
            lives_left: self.lives,
        }
    }

    /// Switch cheat mode. Switching it off restores what it overrode.
    pub fn toggle_cheat(&mut self, config: &GameConfig) {
        if let Some(backup) = self.cheat_backup.take() {
            self.cheat_mode = false;
            self.lives = backup.lives;
            self.shield_active = backup.shield_active;
            self.buffs = backup.buffs;
            self.auto_fire = backup.auto_fire;
            return;
        }

        self.cheat_backup = Some(CheatBackup {
            lives: self.lives,
            shield_active: self.shield_active,
            buffs: self.buffs.clone(),
            auto_fire: self.auto_fire,
        });
        self.cheat_mode = true;
        self.lives = config.cheat_lives;
        self.shield_active = true;
        self.auto_fire = true;
        for timer in self.buffs.values_mut() {
            *timer = BuffTimer::Permanent;
        }
    }

    /// Apply a collected power-up.
    pub fn collect(&mut self, kind: PowerUpKind, config: &GameConfig) {
        match Buff::from_powerup(kind) {
            None => {
                if !self.cheat_mode {
                    self.lives = (self.lives + 1).min(config.max_lives);
                }
            }
            Some(buff) => {
                self.buffs.entry(buff).or_default().refresh(config.powerup_duration);
                if buff == Buff::Shield {
                    self.shield_active = true;
                }
            }
        }
    }

    /// Count a kill toward the combo.
    pub fn register_kill(&mut self) {
        self.combo += 1;
        self.kills += 1;
        self.last_kill = self.clock;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if self.dead {
            return;
        }

        let flashing = self.invincibility > 0.0 && (self.invincibility * 10.0) as i32 % 2 == 0;
        let color = if flashing { FLASH_COLOR } else { BODY_COLOR };
        let shoulder = self.position + Vec3::new(0.0, 0.0, 0.3);

        canvas.sphere(self.position, 0.5, color);
        canvas.sphere(self.position + Vec3::Z * 0.7, 0.3, color);
        canvas.line(shoulder + Vec3::X * 0.7, shoulder + Vec3::X * 1.3, color);
        canvas.line(shoulder - Vec3::X * 0.7, shoulder - Vec3::X * 1.3, color);

        for projectile in &self.projectiles {
            projectile.draw(canvas);
        }
        for bomb in &self.bombs {
            bomb.draw(canvas);
        }

        if self.shield_active {
            canvas.sphere(self.position, 1.2, SHIELD_COLOR);
        }

        for particle in &self.particles {
            particle.draw(canvas);
        }

        if self.super_power.active {
            canvas.sphere(self.position, 5.0 + self.super_power.elapsed() * 10.0, SUPER_COLOR);
        }
    }
}

/// Whether more than `delay` seconds passed since `last`. Never-used is ready.
fn elapsed(last: Option<f32>, now: f32, delay: f32) -> bool {
    last.map_or(true, |last| now - last > delay)
}
