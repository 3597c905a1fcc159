//! Session state shared across game modes
//!
//! One `GameContext` per play session; it outlives the per-level play
//! states and is handed by mutable reference into every state hook. The
//! tick loop is its sole mutator.

use crate::audio::{NullSounds, SoundSink};
use crate::config::{GameConfig, GamePreset};
use crate::input::PressedKeys;
use crate::sim::Bounds;

pub struct GameContext {
    pub lives: u32,
    pub score: u32,
    pub level: u32,
    /// Rockets fired this session; `shots >= hits` always
    pub shots: u32,
    /// Rockets that destroyed an invader
    pub hits: u32,
    /// High-visibility drawing (flicker colors, enlarged projectiles)
    pub vis_mode: bool,
    pub config: GameConfig,
    pub pressed: PressedKeys,
    /// Surface size the draw calls target
    pub width: f32,
    pub height: f32,
    /// Play region, centered in the surface
    pub bounds: Bounds,
    /// Base seed for per-level RNG streams
    pub seed: u64,
    pub sounds: Box<dyn SoundSink>,
}

impl GameContext {
    pub fn new(config: GameConfig, width: f32, height: f32) -> Self {
        Self::with_sounds(config, width, height, Box::new(NullSounds::new()))
    }

    pub fn with_sounds(
        config: GameConfig,
        width: f32,
        height: f32,
        sounds: Box<dyn SoundSink>,
    ) -> Self {
        let bounds = Bounds::centered(width, height, config.game_width, config.game_height);
        Self {
            lives: GamePreset::Normal.starting_lives(),
            score: 0,
            level: 1,
            shots: 0,
            hits: 0,
            vis_mode: false,
            config,
            pressed: PressedKeys::new(),
            width,
            height,
            bounds,
            seed: rand::random(),
            sounds,
        }
    }

    /// Reset counters and restore the config override bundle for a fresh
    /// session under the given preset.
    pub fn reset_for(&mut self, preset: GamePreset) {
        log::info!("starting {} session", preset.as_str());
        preset.apply(&mut self.config);
        self.lives = preset.starting_lives();
        self.vis_mode = preset.vis_mode();
        self.score = 0;
        self.level = 1;
        self.shots = 0;
        self.hits = 0;
    }

    /// Session shot accuracy as a whole percentage; 0 before the first shot.
    pub fn accuracy(&self) -> u32 {
        if self.shots == 0 {
            return 0;
        }
        ((self.hits * 100) as f32 / self.shots as f32).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        let mut ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        ctx.hits = 3;
        ctx.shots = 4;
        assert_eq!(ctx.accuracy(), 75);

        ctx.hits = 1;
        ctx.shots = 3;
        assert_eq!(ctx.accuracy(), 33);
    }

    #[test]
    fn test_accuracy_zero_shots_is_zero() {
        let ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        assert_eq!(ctx.shots, 0);
        assert_eq!(ctx.accuracy(), 0);
    }

    #[test]
    fn test_reset_for_preset() {
        crate::init_test_logging();
        let mut ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        ctx.score = 120;
        ctx.level = 4;
        ctx.shots = 30;
        ctx.hits = 12;

        ctx.reset_for(GamePreset::Crazy);
        assert_eq!(ctx.score, 0);
        assert_eq!(ctx.level, 1);
        assert_eq!(ctx.shots, 0);
        assert_eq!(ctx.hits, 0);
        assert_eq!(ctx.lives, 5);
        assert!(ctx.vis_mode);
        assert_eq!(ctx.config.rocket_max_fire_rate, 20.0);

        ctx.reset_for(GamePreset::Normal);
        assert_eq!(ctx.lives, 3);
        assert!(!ctx.vis_mode);
        assert_eq!(ctx.config, GameConfig::default());
    }
}
