//! Entity records: ship, invader, rocket, bomb, play bounds
//!
//! Positions are box centers; `Bounds` is the playable region centered in
//! the surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub const SHIP_WIDTH: f32 = 20.0;
pub const SHIP_HEIGHT: f32 = 16.0;
pub const INVADER_WIDTH: f32 = 18.0;
pub const INVADER_HEIGHT: f32 = 14.0;

/// The player's ship; one per play state, clamped to the horizontal bounds
/// each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Ship {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
        }
    }
}

/// One member of the formation grid.
///
/// `rank` increases downward (toward the ship); the (rank, file) pair is
/// unique among live invaders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Invader {
    pub pos: Vec2,
    pub rank: u32,
    pub file: u32,
    pub width: f32,
    pub height: f32,
}

impl Invader {
    pub fn new(x: f32, y: f32, rank: u32, file: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            rank,
            file,
            width: INVADER_WIDTH,
            height: INVADER_HEIGHT,
        }
    }
}

/// Fired by the ship; moves straight up, removed above the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub pos: Vec2,
    /// Upward speed, px/s
    pub velocity: f32,
}

impl Rocket {
    pub fn new(x: f32, y: f32, velocity: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity,
        }
    }
}

/// Dropped by front-rank invaders; moves straight down, removed below the
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Vec2,
    /// Downward speed, px/s
    pub velocity: f32,
}

impl Bomb {
    pub fn new(x: f32, y: f32, velocity: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity,
        }
    }
}

/// Playable region edges in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Center a `game_width` x `game_height` region in the surface
    pub fn centered(surface_width: f32, surface_height: f32, game_width: f32, game_height: f32) -> Self {
        Self {
            left: surface_width / 2.0 - game_width / 2.0,
            right: surface_width / 2.0 + game_width / 2.0,
            top: surface_height / 2.0 - game_height / 2.0,
            bottom: surface_height / 2.0 + game_height / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_centered() {
        let bounds = Bounds::centered(500.0, 400.0, 400.0, 300.0);
        assert_eq!(bounds.left, 50.0);
        assert_eq!(bounds.right, 450.0);
        assert_eq!(bounds.top, 50.0);
        assert_eq!(bounds.bottom, 350.0);
        assert_eq!(bounds.width(), 400.0);
        assert_eq!(bounds.height(), 300.0);
    }
}
