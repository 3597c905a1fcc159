//! Sound sink seam
//!
//! Sound decoding and playback live outside the core. States request loads
//! once up front and trigger playback by name; a sound that failed to load
//! or a muted sink makes `play_sound` a silent no-op. Load failures are the
//! backend's business to log; they never surface as errors here.

/// Playback interface consumed by the game states.
pub trait SoundSink {
    /// Begin loading a named sound from a backend-defined source.
    ///
    /// Loading is asynchronous by contract: completion only flips whether
    /// the name is playable. Failures are logged by the implementation and
    /// leave the sound unplayable. Loads are attempted once, no retry.
    fn load_sound(&mut self, name: &str, source: &str);

    /// Play a loaded sound; no-op when the name is unloaded or the sink is
    /// muted.
    fn play_sound(&mut self, name: &str);

    fn set_muted(&mut self, muted: bool);

    fn toggle_muted(&mut self);

    fn is_muted(&self) -> bool;
}

/// Headless sink: tracks loads and plays but produces no audio.
///
/// The default backend for tests and for driving the core without an audio
/// device. `played` keeps the cue history so tests can assert that shoot /
/// bang / explosion effects fired.
#[derive(Debug, Default)]
pub struct NullSounds {
    loaded: Vec<String>,
    /// Cue names in playback order (only cues that were actually playable)
    pub played: Vec<String>,
    muted: bool,
}

impl NullSounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.iter().any(|n| n == name)
    }
}

impl SoundSink for NullSounds {
    fn load_sound(&mut self, name: &str, source: &str) {
        log::debug!("loading sound '{name}' from {source}");
        if !self.is_loaded(name) {
            self.loaded.push(name.to_string());
        }
    }

    fn play_sound(&mut self, name: &str) {
        if self.muted || !self.is_loaded(name) {
            return;
        }
        self.played.push(name.to_string());
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn toggle_muted(&mut self) {
        self.muted = !self.muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_sound_is_silent() {
        let mut sounds = NullSounds::new();
        sounds.play_sound("shoot");
        assert!(sounds.played.is_empty());

        sounds.load_sound("shoot", "sounds/shoot.wav");
        sounds.play_sound("shoot");
        assert_eq!(sounds.played, vec!["shoot"]);
    }

    #[test]
    fn test_mute_suppresses_playback() {
        let mut sounds = NullSounds::new();
        sounds.load_sound("bang", "sounds/bang.wav");
        sounds.set_muted(true);
        sounds.play_sound("bang");
        assert!(sounds.played.is_empty());

        sounds.toggle_muted();
        assert!(!sounds.is_muted());
        sounds.play_sound("bang");
        assert_eq!(sounds.played, vec!["bang"]);
    }
}
