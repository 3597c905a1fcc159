//! Entities and geometry for the play simulation
//!
//! Passive data only: positions, sizes and velocities. All behavior lives
//! in the play state, which mutates these records in a fixed per-tick order.

pub mod collision;
pub mod entities;

pub use collision::{boxes_overlap, point_in_box};
pub use entities::{Bomb, Bounds, Invader, Rocket, Ship};
