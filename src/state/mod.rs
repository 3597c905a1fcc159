//! Game mode stack
//!
//! Exactly one state is current (top of stack) and receives the per-tick
//! update/draw dispatch and key events. Full mode switches replace the top
//! (welcome -> level intro -> play -> game over); overlays push and pop
//! (pause on top of play, which suspends the play state untouched).
//!
//! States cannot mutate the machine they live in, so mutating hooks return
//! a `Transition` which the machine applies after the hook returns.

pub mod game_over;
pub mod level_intro;
pub mod pause;
pub mod play;
pub mod welcome;

pub use game_over::GameOverState;
pub use level_intro::LevelIntroState;
pub use pause::PauseState;
pub use play::PlayState;
pub use welcome::WelcomeState;

use crate::context::GameContext;
use crate::input::Key;
use crate::render::RenderSink;

/// Stack operation requested by a state hook
pub enum Transition {
    None,
    /// Swap out the current state (leave old, enter new)
    Replace(Box<dyn State>),
    /// Overlay a state on top of the current one
    Push(Box<dyn State>),
    /// Remove the current state, resuming the one below
    Pop,
}

/// A game mode. Every hook defaults to a no-op; states implement only what
/// they need.
pub trait State {
    /// Stable identifier, used for logging and tests
    fn name(&self) -> &'static str;

    fn enter(&mut self, _ctx: &mut GameContext) {}

    fn leave(&mut self, _ctx: &mut GameContext) {}

    fn update(&mut self, _ctx: &mut GameContext, _dt: f32) -> Transition {
        Transition::None
    }

    fn draw(&self, _ctx: &GameContext, _dt: f32, _sink: &mut dyn RenderSink) {}

    fn key_down(&mut self, _ctx: &mut GameContext, _key: Key) -> Transition {
        Transition::None
    }

    fn key_up(&mut self, _ctx: &mut GameContext, _key: Key) -> Transition {
        Transition::None
    }
}

/// Ordered stack of states; the top entry is the active mode.
#[derive(Default)]
pub struct StateMachine {
    stack: Vec<Box<dyn State>>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Name of the active mode, if any
    pub fn current(&self) -> Option<&'static str> {
        self.stack.last().map(|s| s.name())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Swap the top of the stack for `state`: leave and remove the current
    /// state if there is one, then enter and push the new one.
    pub fn replace(&mut self, ctx: &mut GameContext, mut state: Box<dyn State>) {
        if let Some(mut old) = self.stack.pop() {
            old.leave(ctx);
        }
        log::debug!("state -> {}", state.name());
        state.enter(ctx);
        self.stack.push(state);
    }

    /// Overlay `state` without removing the current top.
    pub fn push(&mut self, ctx: &mut GameContext, mut state: Box<dyn State>) {
        log::debug!("state overlay -> {}", state.name());
        state.enter(ctx);
        self.stack.push(state);
    }

    /// Remove the current state, exposing the previous entry. Popping an
    /// empty stack is a no-op.
    pub fn pop(&mut self, ctx: &mut GameContext) {
        match self.stack.pop() {
            Some(mut old) => old.leave(ctx),
            None => log::warn!("pop with no active state ignored"),
        }
    }

    /// Per-tick update dispatch to the active mode.
    pub fn update(&mut self, ctx: &mut GameContext, dt: f32) {
        let transition = match self.stack.last_mut() {
            Some(state) => state.update(ctx, dt),
            None => return,
        };
        self.apply(ctx, transition);
    }

    /// Per-tick draw dispatch to the active mode.
    pub fn draw(&self, ctx: &GameContext, dt: f32, sink: &mut dyn RenderSink) {
        if let Some(state) = self.stack.last() {
            state.draw(ctx, dt, sink);
        }
    }

    pub fn key_down(&mut self, ctx: &mut GameContext, key: Key) {
        let transition = match self.stack.last_mut() {
            Some(state) => state.key_down(ctx, key),
            None => return,
        };
        self.apply(ctx, transition);
    }

    pub fn key_up(&mut self, ctx: &mut GameContext, key: Key) {
        let transition = match self.stack.last_mut() {
            Some(state) => state.key_up(ctx, key),
            None => return,
        };
        self.apply(ctx, transition);
    }

    fn apply(&mut self, ctx: &mut GameContext, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Replace(state) => self.replace(ctx, state),
            Transition::Push(state) => self.push(ctx, state),
            Transition::Pop => self.pop(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records hook invocations for ordering assertions
    struct Probe {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        on_update: Option<fn() -> Transition>,
    }

    impl Probe {
        fn new(tag: &'static str, log: Rc<RefCell<Vec<String>>>) -> Box<Self> {
            Box::new(Self {
                tag,
                log,
                on_update: None,
            })
        }

        fn note(&self, hook: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.tag, hook));
        }
    }

    impl State for Probe {
        fn name(&self) -> &'static str {
            self.tag
        }

        fn enter(&mut self, _ctx: &mut GameContext) {
            self.note("enter");
        }

        fn leave(&mut self, _ctx: &mut GameContext) {
            self.note("leave");
        }

        fn update(&mut self, _ctx: &mut GameContext, _dt: f32) -> Transition {
            self.note("update");
            match self.on_update.take() {
                Some(f) => f(),
                None => Transition::None,
            }
        }
    }

    fn ctx() -> GameContext {
        crate::init_test_logging();
        GameContext::new(GameConfig::default(), 500.0, 400.0)
    }

    #[test]
    fn test_replace_runs_leave_then_enter() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = ctx();
        let mut machine = StateMachine::new();

        machine.replace(&mut ctx, Probe::new("a", log.clone()));
        machine.replace(&mut ctx, Probe::new("b", log.clone()));

        assert_eq!(machine.current(), Some("b"));
        assert_eq!(machine.depth(), 1);
        assert_eq!(*log.borrow(), vec!["a:enter", "a:leave", "b:enter"]);
    }

    #[test]
    fn test_push_pop_round_trip() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = ctx();
        let mut machine = StateMachine::new();

        machine.replace(&mut ctx, Probe::new("base", log.clone()));
        machine.push(&mut ctx, Probe::new("overlay", log.clone()));
        assert_eq!(machine.current(), Some("overlay"));
        assert_eq!(machine.depth(), 2);

        machine.pop(&mut ctx);
        assert_eq!(machine.current(), Some("base"));
        assert_eq!(
            *log.borrow(),
            vec!["base:enter", "overlay:enter", "overlay:leave"]
        );
    }

    #[test]
    fn test_empty_stack_is_harmless() {
        let mut ctx = ctx();
        let mut machine = StateMachine::new();
        machine.pop(&mut ctx);
        machine.update(&mut ctx, 0.02);
        machine.key_down(&mut ctx, Key::Space);
        machine.key_up(&mut ctx, Key::Space);
        assert_eq!(machine.current(), None);
    }

    #[test]
    fn test_update_dispatches_to_top_only() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = ctx();
        let mut machine = StateMachine::new();

        machine.replace(&mut ctx, Probe::new("below", log.clone()));
        machine.push(&mut ctx, Probe::new("top", log.clone()));
        log.borrow_mut().clear();

        machine.update(&mut ctx, 0.02);
        assert_eq!(*log.borrow(), vec!["top:update"]);
    }

    #[test]
    fn test_update_transition_is_applied() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = ctx();
        let mut machine = StateMachine::new();

        let mut popper = Probe::new("popper", log.clone());
        popper.on_update = Some(|| Transition::Pop);
        machine.replace(&mut ctx, Probe::new("base", log.clone()));
        machine.push(&mut ctx, popper);

        machine.update(&mut ctx, 0.02);
        assert_eq!(machine.current(), Some("base"));
    }
}
