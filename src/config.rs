//! Tuning parameters, difficulty presets and per-level scaling
//!
//! `GameConfig` is the full set of recognized options; `GamePreset` is a
//! closed set of named override bundles picked on the welcome and game-over
//! screens. `LevelTuning` derives the per-level scaled values used by a
//! single play-state instance.

use serde::{Deserialize, Serialize};

use crate::input::Key;

/// All tuning options for a session.
///
/// Rates are per second, velocities and distances in pixels/seconds unless
/// noted. Defaults match the classic "normal" balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Bomb drop probability density per front-rank invader (per second)
    pub bomb_rate: f32,
    pub bomb_min_velocity: f32,
    pub bomb_max_velocity: f32,
    /// Horizontal formation speed at level 1, before scaling
    pub invader_initial_velocity: f32,
    /// Speed gained on each boundary reversal
    pub invader_acceleration: f32,
    /// Vertical distance of one formation drop
    pub invader_drop_distance: f32,
    pub rocket_velocity: f32,
    /// Maximum rockets per second
    pub rocket_max_fire_rate: f32,
    /// Play-bounds width, centered in the surface
    pub game_width: f32,
    /// Play-bounds height, centered in the surface
    pub game_height: f32,
    /// Fixed tick frequency the scheduler should run at
    pub fps: f32,
    /// Draw play-bounds outlines
    pub debug_mode: bool,
    /// Formation rows at level 1
    pub invader_ranks: u32,
    /// Formation columns at level 1
    pub invader_files: u32,
    pub ship_speed: f32,
    /// Scalar applied to the level number in all scaling formulas
    pub level_difficulty_multiplier: f32,
    pub points_per_invader: u32,
    /// Level at which rank/file/fire-rate growth stops
    pub limit_level_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bomb_rate: 0.05,
            bomb_min_velocity: 50.0,
            bomb_max_velocity: 50.0,
            invader_initial_velocity: 25.0,
            invader_acceleration: 0.0,
            invader_drop_distance: 20.0,
            rocket_velocity: 120.0,
            rocket_max_fire_rate: 2.0,
            game_width: 400.0,
            game_height: 300.0,
            fps: 50.0,
            debug_mode: false,
            invader_ranks: 5,
            invader_files: 10,
            ship_speed: 120.0,
            level_difficulty_multiplier: 0.2,
            points_per_invader: 5,
            limit_level_increase: 25,
        }
    }
}

/// Named difficulty presets selectable on the welcome / game-over screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePreset {
    #[default]
    Normal,
    Hard,
    /// Normal balance with high-visibility drawing
    Visibility,
    /// Hard balance, vis-mode drawing and a near-unlimited fire rate
    Crazy,
}

impl GamePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePreset::Normal => "normal",
            GamePreset::Hard => "hard",
            GamePreset::Visibility => "visibility",
            GamePreset::Crazy => "crazy",
        }
    }

    /// The menu key that selects this preset
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(GamePreset::Normal),
            Key::KeyH => Some(GamePreset::Hard),
            Key::KeyV => Some(GamePreset::Visibility),
            Key::KeyC => Some(GamePreset::Crazy),
            _ => None,
        }
    }

    pub fn starting_lives(&self) -> u32 {
        match self {
            GamePreset::Normal | GamePreset::Visibility => 3,
            GamePreset::Hard | GamePreset::Crazy => 5,
        }
    }

    /// Whether this preset draws in high-visibility mode
    pub fn vis_mode(&self) -> bool {
        matches!(self, GamePreset::Visibility | GamePreset::Crazy)
    }

    /// Apply this preset's gameplay overrides.
    ///
    /// Only balance fields are touched; surface-related options
    /// (dimensions, fps, debug mode) keep their current values.
    pub fn apply(&self, config: &mut GameConfig) {
        let base = GameConfig::default();
        config.points_per_invader = base.points_per_invader;
        config.bomb_rate = base.bomb_rate;
        config.level_difficulty_multiplier = base.level_difficulty_multiplier;
        config.ship_speed = base.ship_speed;
        config.rocket_velocity = base.rocket_velocity;
        config.rocket_max_fire_rate = base.rocket_max_fire_rate;

        match self {
            GamePreset::Normal | GamePreset::Visibility => {}
            GamePreset::Hard => {
                config.points_per_invader = 2;
                config.bomb_rate = 0.2;
                config.level_difficulty_multiplier = 0.8;
                config.ship_speed = 200.0;
                config.rocket_velocity = 160.0;
            }
            GamePreset::Crazy => {
                config.points_per_invader = 2;
                config.bomb_rate = 0.2;
                config.level_difficulty_multiplier = 0.8;
                config.ship_speed = 200.0;
                config.rocket_velocity = 160.0;
                config.rocket_max_fire_rate = 20.0;
            }
        }
    }
}

/// Per-level scaled parameters, derived once when a play state is built.
///
/// `ranks`/`files` stay fractional: the grid loop runs while the integer
/// index is below them, so a fractional part buys one extra row/column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelTuning {
    pub ship_speed: f32,
    pub invader_velocity: f32,
    pub bomb_rate: f32,
    pub bomb_min_velocity: f32,
    pub bomb_max_velocity: f32,
    pub rocket_max_fire_rate: f32,
    pub ranks: f32,
    pub files: f32,
}

impl LevelTuning {
    pub fn derive(config: &GameConfig, level: u32) -> Self {
        let level_multiplier = level as f32 * config.level_difficulty_multiplier;
        let limit_level = level.min(config.limit_level_increase) as f32;

        Self {
            ship_speed: config.ship_speed,
            invader_velocity: config.invader_initial_velocity * (1.0 + 1.5 * level_multiplier),
            bomb_rate: config.bomb_rate * (1.0 + level_multiplier),
            bomb_min_velocity: config.bomb_min_velocity * (1.0 + level_multiplier),
            bomb_max_velocity: config.bomb_max_velocity * (1.0 + level_multiplier),
            rocket_max_fire_rate: config.rocket_max_fire_rate + 0.4 * limit_level,
            ranks: config.invader_ranks as f32 + 0.1 * limit_level,
            files: config.invader_files as f32 + 0.2 * limit_level,
        }
    }

    /// Formation rows to place (integer index loop bound over `ranks`)
    pub fn rank_count(&self) -> u32 {
        self.ranks.ceil().max(0.0) as u32
    }

    /// Formation columns to place (integer index loop bound over `files`)
    pub fn file_count(&self) -> u32 {
        self.files.ceil().max(0.0) as u32
    }
}
