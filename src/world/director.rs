//! Wave timer, difficulty ramp and boss thresholds.

use rand::Rng;

use crate::core::GameConfig;

/// Spawn pressure for one wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Per-step probability of spawning an enemy (also gates power-up rolls)
    pub spawn_rate: f32,
    /// Enemy population cap
    pub max_enemies: usize,
}

impl Difficulty {
    /// Difficulty of wave `wave` (1-based), clamped to the configured ceilings.
    pub fn for_wave(wave: u32, config: &GameConfig) -> Self {
        let steps = wave.saturating_sub(1);
        Self {
            spawn_rate: (config.base_spawn_rate + steps as f32 * config.spawn_rate_step)
                .min(config.max_spawn_rate),
            max_enemies: (config.base_max_enemies + steps as usize * config.max_enemies_step)
                .min(config.max_enemies_ceiling),
        }
    }
}

/// Drives waves and decides when enemies, power-ups and bosses appear.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    pub wave: u32,
    /// Seconds left in the current wave
    pub timer: f32,
    pub difficulty: Difficulty,
    /// Score at which the next boss shows up
    pub next_boss_score: u32,
}

impl WaveDirector {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            wave: 1,
            timer: config.wave_duration,
            difficulty: Difficulty::for_wave(1, config),
            next_boss_score: config.boss_spawn_score,
        }
    }

    /// Count down the wave timer. Returns the new wave number when one starts.
    pub fn tick(&mut self, dt: f32, config: &GameConfig) -> Option<u32> {
        self.timer -= dt;
        if self.timer > 0.0 {
            return None;
        }

        self.wave += 1;
        self.timer = config.wave_duration;
        self.difficulty = Difficulty::for_wave(self.wave, config);
        Some(self.wave)
    }

    /// Bernoulli roll against the spawn rate, only while under the cap.
    pub fn roll_spawn(&self, population: usize, rng: &mut impl Rng) -> bool {
        population < self.difficulty.max_enemies && rng.gen::<f32>() < self.difficulty.spawn_rate
    }

    pub fn boss_due(&self, score: u32, boss_alive: bool) -> bool {
        !boss_alive && score >= self.next_boss_score
    }

    /// Raise the threshold once a boss has been spawned.
    pub fn boss_spawned(&mut self, config: &GameConfig) {
        self.next_boss_score += config.boss_spawn_score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn difficulty_ramps_and_caps() {
        let config = GameConfig::default();
        let first = Difficulty::for_wave(1, &config);
        assert!((first.spawn_rate - 0.01).abs() < 1e-6);
        assert_eq!(first.max_enemies, 10);

        let third = Difficulty::for_wave(3, &config);
        assert!((third.spawn_rate - 0.02).abs() < 1e-6);
        assert_eq!(third.max_enemies, 14);

        let late = Difficulty::for_wave(50, &config);
        assert!((late.spawn_rate - 0.05).abs() < 1e-6);
        assert_eq!(late.max_enemies, 20);
    }

    #[test]
    fn wave_advances_when_timer_runs_out() {
        let config = GameConfig {
            wave_duration: 1.0,
            ..GameConfig::default()
        };
        let mut director = WaveDirector::new(&config);
        assert_eq!(director.tick(0.5, &config), None);
        assert_eq!(director.tick(0.6, &config), Some(2));
        assert_eq!(director.timer, 1.0);
        assert_eq!(director.difficulty.max_enemies, 12);
    }

    #[test]
    fn boss_thresholds_step_up() {
        let config = GameConfig::default();
        let mut director = WaveDirector::new(&config);
        assert!(!director.boss_due(100, false));
        assert!(director.boss_due(200, false));
        assert!(!director.boss_due(200, true));

        director.boss_spawned(&config);
        assert_eq!(director.next_boss_score, 400);
        assert!(!director.boss_due(300, false));
    }

    #[test]
    fn full_arena_never_spawns() {
        let config = GameConfig {
            base_spawn_rate: 1.0,
            max_spawn_rate: 1.0,
            ..GameConfig::default()
        };
        let director = WaveDirector::new(&config);
        let mut rng = StdRng::seed_from_u64(4);
        assert!(director.roll_spawn(0, &mut rng));
        assert!(!director.roll_spawn(10, &mut rng));
    }
}
