//! Welcome screen: title, mode menu, sound preloading

use super::{LevelIntroState, State, Transition};
use crate::config::GamePreset;
use crate::context::GameContext;
use crate::input::Key;
use crate::render::{RenderSink, TextStyle};

pub struct WelcomeState;

impl State for WelcomeState {
    fn name(&self) -> &'static str {
        "welcome"
    }

    fn enter(&mut self, ctx: &mut GameContext) {
        // Kick off the one-shot sound loads; playback stays silently
        // disabled for any that fail.
        ctx.sounds.load_sound("shoot", "sounds/shoot.wav");
        ctx.sounds.load_sound("bang", "sounds/bang.wav");
        ctx.sounds.load_sound("explosion", "sounds/explosion.wav");
    }

    fn draw(&self, ctx: &GameContext, _dt: f32, sink: &mut dyn RenderSink) {
        sink.clear(ctx.width, ctx.height);

        let cx = ctx.width / 2.0;
        let cy = ctx.height / 2.0;
        sink.text("Space Invaders", cx, cy - 40.0, TextStyle::sized(30.0));
        sink.text("Press:", cx, cy, TextStyle::sized(20.0));
        let small = TextStyle::sized(14.0);
        sink.text("'Space' for normal mode", cx, cy + 20.0, small);
        sink.text("'h' for Hard Mode", cx, cy + 40.0, small);
        sink.text("'v' for Visibility mode", cx, cy + 60.0, small);
        sink.text("'c' for Crazy mode", cx, cy + 80.0, small);
    }

    fn key_down(&mut self, ctx: &mut GameContext, key: Key) -> Transition {
        match GamePreset::from_key(key) {
            Some(preset) => {
                ctx.reset_for(preset);
                Transition::Replace(Box::new(LevelIntroState::new(1)))
            }
            None => Transition::None,
        }
    }
}
