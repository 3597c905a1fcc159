//! Key identities and the pressed-key set
//!
//! Raw keyboard/touch capture happens upstream; by the time input reaches
//! the core it is one of these key identities. Momentary presses dispatch
//! into the current state's `key_down`, while held movement/fire keys are
//! read from `PressedKeys` at the start of each tick.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the core recognizes.
///
/// Touch drags are translated upstream into `Left`/`Right`, taps into
/// `Space`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Fire; also selects normal mode on menu screens
    Space,
    /// Hard mode
    KeyH,
    /// Visibility mode
    KeyV,
    /// Crazy mode
    KeyC,
    /// Pause toggle
    KeyP,
}

/// The set of currently held keys, mutated by key events and read
/// synchronously each tick.
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    held: HashSet<Key>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut keys = PressedKeys::new();
        assert!(!keys.is_down(Key::Left));
        keys.press(Key::Left);
        keys.press(Key::Space);
        assert!(keys.is_down(Key::Left));
        assert!(keys.is_down(Key::Space));
        keys.release(Key::Left);
        assert!(!keys.is_down(Key::Left));
        assert!(keys.is_down(Key::Space));
        keys.clear();
        assert!(!keys.is_down(Key::Space));
    }
}
