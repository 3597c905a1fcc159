//! Passive game facade
//!
//! Owns the session context and the mode stack. An external scheduler
//! drives `tick`/`tick_and_draw` at the configured frequency; key events
//! arrive between ticks and only touch the pressed-key set plus the current
//! state's key hooks, so the tick loop stays the sole simulation mutator.

use crate::audio::SoundSink;
use crate::config::GameConfig;
use crate::context::GameContext;
use crate::input::Key;
use crate::render::RenderSink;
use crate::state::{StateMachine, WelcomeState};

pub struct Game {
    pub context: GameContext,
    machine: StateMachine,
}

impl Game {
    /// Build a game for a surface of the given size; play bounds are the
    /// config's game area centered in it.
    pub fn new(config: GameConfig, surface_width: f32, surface_height: f32) -> Self {
        Self {
            context: GameContext::new(config, surface_width, surface_height),
            machine: StateMachine::new(),
        }
    }

    pub fn with_sounds(
        config: GameConfig,
        surface_width: f32,
        surface_height: f32,
        sounds: Box<dyn SoundSink>,
    ) -> Self {
        Self {
            context: GameContext::with_sounds(config, surface_width, surface_height, sounds),
            machine: StateMachine::new(),
        }
    }

    /// Move into the welcome state. Call once before ticking.
    pub fn start(&mut self) {
        self.machine.replace(&mut self.context, Box::new(WelcomeState));
    }

    /// The fixed timestep the scheduler should drive this game at
    pub fn dt(&self) -> f32 {
        1.0 / self.context.config.fps
    }

    /// Advance the current mode by one fixed step (update only).
    pub fn tick(&mut self, dt: f32) {
        self.machine.update(&mut self.context, dt);
    }

    /// Advance one fixed step, then draw the current mode into `sink`.
    pub fn tick_and_draw(&mut self, dt: f32, sink: &mut dyn RenderSink) {
        self.machine.update(&mut self.context, dt);
        self.machine.draw(&self.context, dt, sink);
    }

    /// Draw without advancing (e.g. redraw after a resize).
    pub fn draw(&self, dt: f32, sink: &mut dyn RenderSink) {
        self.machine.draw(&self.context, dt, sink);
    }

    pub fn key_down(&mut self, key: Key) {
        self.context.pressed.press(key);
        self.machine.key_down(&mut self.context, key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.context.pressed.release(key);
        self.machine.key_up(&mut self.context, key);
    }

    /// Mute (`Some(true)`), unmute (`Some(false)`) or toggle (`None`).
    pub fn mute(&mut self, muted: Option<bool>) {
        match muted {
            Some(m) => self.context.sounds.set_muted(m),
            None => self.context.sounds.toggle_muted(),
        }
    }

    /// Name of the active mode, if any
    pub fn current_state(&self) -> Option<&'static str> {
        self.machine.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{NullSink, RecordingSink};
    use crate::scheduler::FixedTick;

    fn started() -> Game {
        crate::init_test_logging();
        let mut game = Game::new(GameConfig::default(), 500.0, 400.0);
        game.start();
        game
    }

    /// Tick `seconds` of sim time through the facade
    fn run(game: &mut Game, seconds: f32) {
        let dt = game.dt();
        let ticks = (seconds / dt).round() as u32;
        for _ in 0..ticks {
            game.tick(dt);
        }
    }

    #[test]
    fn test_session_flow_welcome_to_play() {
        let mut game = started();
        assert_eq!(game.current_state(), Some("welcome"));

        game.key_down(Key::Space);
        game.key_up(Key::Space);
        assert_eq!(game.current_state(), Some("level_intro"));

        run(&mut game, 3.1);
        assert_eq!(game.current_state(), Some("play"));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut game = started();
        game.key_down(Key::Space);
        game.key_up(Key::Space);
        run(&mut game, 3.1);
        assert_eq!(game.current_state(), Some("play"));

        game.key_down(Key::KeyP);
        assert_eq!(game.current_state(), Some("pause"));
        run(&mut game, 5.0);
        game.key_up(Key::KeyP);
        game.key_down(Key::KeyP);
        assert_eq!(game.current_state(), Some("play"));
    }

    #[test]
    fn test_held_fire_respects_rate_cap() {
        let mut game = started();
        game.key_down(Key::Space);
        run(&mut game, 3.1);
        assert_eq!(game.current_state(), Some("play"));

        // hold fire for two seconds at a 2.4/s cap
        run(&mut game, 2.0);
        assert!(game.context.shots >= 4);
        assert!(game.context.shots <= 6);
        assert!(game.context.shots >= game.context.hits);
    }

    #[test]
    fn test_scheduler_drives_facade() {
        let mut game = started();
        let mut scheduler = FixedTick::new(game.context.config.fps);
        let mut sink = NullSink;

        game.key_down(Key::Space);
        game.key_up(Key::Space);
        // 3.2 wall seconds in uneven frame chunks
        for _ in 0..32 {
            scheduler.advance(0.1, |dt| game.tick_and_draw(dt, &mut sink));
        }
        assert_eq!(game.current_state(), Some("play"));
    }

    #[test]
    fn test_draw_does_not_advance() {
        let mut game = started();
        game.key_down(Key::Space);
        game.key_up(Key::Space);
        let mut sink = RecordingSink::new();
        game.draw(game.dt(), &mut sink);
        game.draw(game.dt(), &mut sink);
        assert_eq!(game.current_state(), Some("level_intro"));
        assert!(sink.all_text().contains("Ready in 3"));
    }

    #[test]
    fn test_mute_toggle() {
        let mut game = started();
        game.mute(Some(true));
        assert!(game.context.sounds.is_muted());
        game.mute(None);
        assert!(!game.context.sounds.is_muted());
        game.mute(None);
        assert!(game.context.sounds.is_muted());
        game.mute(Some(false));
        assert!(!game.context.sounds.is_muted());
    }
}
