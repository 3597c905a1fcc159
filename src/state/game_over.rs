//! Game over screen: final score, level and accuracy, plus restart menu

use super::{LevelIntroState, State, Transition};
use crate::config::GamePreset;
use crate::context::GameContext;
use crate::input::Key;
use crate::render::{RenderSink, TextStyle};

pub struct GameOverState;

impl State for GameOverState {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn draw(&self, ctx: &GameContext, _dt: f32, sink: &mut dyn RenderSink) {
        sink.clear(ctx.width, ctx.height);

        let cx = ctx.width / 2.0;
        let cy = ctx.height / 2.0;
        sink.text("Game Over!", cx, cy - 40.0, TextStyle::sized(30.0));
        let info = TextStyle::sized(16.0);
        sink.text(
            &format!("Shot Accuracy {}%", ctx.accuracy()),
            cx,
            cy - 20.0,
            info,
        );
        sink.text(
            &format!("You scored {} and got to level {}", ctx.score, ctx.level),
            cx,
            cy,
            info,
        );
        sink.text(
            "Press 'Space' for normal, 'h' for Hard or 'v' for Visibility, 'c' for Crazy",
            cx,
            cy + 20.0,
            info,
        );
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::render::RecordingSink;
    use crate::state::StateMachine;

    #[test]
    fn test_draw_reports_score_and_accuracy() {
        let mut ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        ctx.score = 85;
        ctx.level = 3;
        ctx.hits = 3;
        ctx.shots = 4;

        let mut sink = RecordingSink::new();
        GameOverState.draw(&ctx, 0.02, &mut sink);
        let text = sink.all_text();
        assert!(text.contains("Game Over!"));
        assert!(text.contains("You scored 85 and got to level 3"));
        assert!(text.contains("Shot Accuracy 75%"));
    }

    #[test]
    fn test_draw_zero_shots_accuracy_is_zero() {
        let ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        let mut sink = RecordingSink::new();
        GameOverState.draw(&ctx, 0.02, &mut sink);
        assert!(sink.all_text().contains("Shot Accuracy 0%"));
    }

    #[test]
    fn test_restart_resets_session() {
        let mut ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        ctx.score = 85;
        ctx.level = 3;
        ctx.shots = 12;
        ctx.hits = 9;
        ctx.vis_mode = true;

        let mut machine = StateMachine::new();
        machine.replace(&mut ctx, Box::new(GameOverState));
        machine.key_down(&mut ctx, Key::Space);

        assert_eq!(machine.current(), Some("level_intro"));
        assert_eq!(ctx.score, 0);
        assert_eq!(ctx.level, 1);
        assert_eq!(ctx.shots, 0);
        assert_eq!(ctx.hits, 0);
        assert_eq!(ctx.lives, 3);
        assert!(!ctx.vis_mode);
    }

    #[test]
    fn test_restart_into_hard() {
        let mut ctx = GameContext::new(GameConfig::default(), 500.0, 400.0);
        let mut machine = StateMachine::new();
        machine.replace(&mut ctx, Box::new(GameOverState));
        machine.key_down(&mut ctx, Key::KeyH);
        assert_eq!(ctx.lives, 5);
        assert_eq!(ctx.config.bomb_rate, 0.2);
        assert!(!ctx.vis_mode);
    }
}
