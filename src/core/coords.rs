//! Screen-space <-> world-space conversion.
//!
//! Config and gameplay rules use screen coordinates:
//! origin at the top-left, y growing downward, 800x600. Bevy's 2D world is
//! centered with y growing upward, so every entity position goes through
//! [`screen_to_world`] exactly once at creation time.

use bevy::prelude::*;

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

pub fn screen_to_world(x: f32, y: f32) -> Vec2 {
    Vec2::new(x - WORLD_WIDTH * 0.5, WORLD_HEIGHT * 0.5 - y)
}
