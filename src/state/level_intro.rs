//! Level intro: a three-second countdown before a fresh play state

use super::{PlayState, State, Transition};
use crate::context::GameContext;
use crate::render::{RenderSink, TextStyle};

pub struct LevelIntroState {
    level: u32,
    /// Seconds remaining before play begins
    countdown: f32,
}

impl LevelIntroState {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            countdown: 3.0,
        }
    }
}

impl State for LevelIntroState {
    fn name(&self) -> &'static str {
        "level_intro"
    }

    fn update(&mut self, ctx: &mut GameContext, dt: f32) -> Transition {
        self.countdown -= dt;
        if self.countdown <= 0.0 {
            // Each level gets its own RNG stream off the session seed.
            let seed = ctx.seed.wrapping_add(self.level as u64);
            return Transition::Replace(Box::new(PlayState::new(&ctx.config, self.level, seed)));
        }
        Transition::None
    }

    fn draw(&self, ctx: &GameContext, _dt: f32, sink: &mut dyn RenderSink) {
        sink.clear(ctx.width, ctx.height);

        let cx = ctx.width / 2.0;
        let cy = ctx.height / 2.0;
        let remaining = self.countdown.ceil().max(1.0) as u32;
        sink.text(&format!("Level {}", self.level), cx, cy, TextStyle::sized(36.0));
        sink.text(
            &format!("Ready in {remaining}"),
            cx,
            cy + 36.0,
            TextStyle::sized(24.0),
        );
    }
}
