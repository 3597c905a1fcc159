//! Gridfire - simulation core for a fixed-formation arcade shooter
//!
//! A player ship defends against a descending grid of invaders that drop
//! bombs while the player returns fire and climbs through levels. This crate
//! is the headless core: the mode stack (welcome, level intro, play, pause,
//! game over) and the active-play simulation. Rendering, audio playback and
//! raw input capture are external collaborators reached through the trait
//! seams in `render` and `audio`.
//!
//! Core modules:
//! - `sim`: entities and collision helpers (pure data, no behavior)
//! - `state`: the state machine and the five game modes
//! - `game`: passive facade exposing `tick(dt)` plus key/mute entry points
//! - `scheduler`: fixed-timestep driver with non-overlapping ticks
//!
//! The simulation is deterministic: fixed timestep only, seeded RNG only,
//! and a sim-local clock for fire-rate limiting (never wall time).

pub mod audio;
pub mod config;
pub mod context;
pub mod game;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod sim;
pub mod state;

pub use audio::{NullSounds, SoundSink};
pub use config::{GameConfig, GamePreset, LevelTuning};
pub use context::GameContext;
pub use game::Game;
pub use input::{Key, PressedKeys};
pub use render::{Color, RenderSink, TextAlign, TextBaseline, TextStyle};
pub use scheduler::FixedTick;

/// Route `log` output through env_logger during tests; honors `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
