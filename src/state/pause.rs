//! Pause overlay: no simulation, pops itself on the pause key

use super::{State, Transition};
use crate::context::GameContext;
use crate::input::Key;
use crate::render::{RenderSink, TextStyle};

pub struct PauseState;

impl State for PauseState {
    fn name(&self) -> &'static str {
        "pause"
    }

    fn draw(&self, ctx: &GameContext, _dt: f32, sink: &mut dyn RenderSink) {
        sink.clear(ctx.width, ctx.height);
        sink.text(
            "Paused",
            ctx.width / 2.0,
            ctx.height / 2.0,
            TextStyle::sized(14.0),
        );
    }

    fn key_down(&mut self, _ctx: &mut GameContext, key: Key) -> Transition {
        match key {
            Key::KeyP => Transition::Pop,
            _ => Transition::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::StateMachine;

    #[test]
    fn test_pause_key_pops() {
        let mut ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        let mut machine = StateMachine::new();
        machine.replace(&mut ctx, Box::new(PauseState));
        machine.key_down(&mut ctx, Key::Space);
        assert_eq!(machine.current(), Some("pause"));
        machine.key_down(&mut ctx, Key::KeyP);
        assert_eq!(machine.current(), None);
    }
}
