//! Gravity and velocity integration. Never looks at platforms.

use glam::Vec2;

use crate::consts::{GRAVITY, MAX_FALL_SPEED};

/// Apply gravity (clamped to max fall speed) and return `(candidate_pos, vel)`
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2) -> (Vec2, Vec2) {
    let vel = Vec2::new(vel.x, (vel.y + GRAVITY).min(MAX_FALL_SPEED));
    (pos + vel, vel)
}
