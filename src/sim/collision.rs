//! Collision detection and response for axis-aligned platforms
//!
//! Platforms are one-way: an agent only collides with a platform's top
//! surface while falling onto it. World edges are solid on every side.

use glam::Vec2;

use super::state::{Platform, PlatformInstance};
use crate::consts::*;

/// Absorbs f32 rounding in `y + height` for agents resting on a platform
const EDGE_EPSILON: f32 = 1e-3;

/// Result of resolving one agent against the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Corrected position
    pub pos: Vec2,
    /// Corrected velocity
    pub vel: Vec2,
    pub on_ground: bool,
    /// Horizontal offset of the moving platform landed on, from its template
    pub carry: f32,
    /// Landed on a mushroom this tick
    pub bounced: bool,
}

/// Resolve a candidate move against platforms and world bounds.
///
/// `templates` and `platforms` are parallel: the template says what a
/// platform is, the instance says where it is this frame. Every platform is
/// tested in map order and later landings overwrite earlier ones.
pub fn resolve_collisions(
    pos: Vec2,
    candidate: Vec2,
    vel: Vec2,
    templates: &[Platform],
    platforms: &[PlatformInstance],
) -> CollisionResult {
    let mut next = candidate;
    let mut vel = vel;
    let mut on_ground = false;
    let mut carry = 0.0;
    let mut bounced = false;

    let feet_before = pos.y + AGENT_HEIGHT;

    for (template, platform) in templates.iter().zip(platforms) {
        if !template.is_solid() {
            continue;
        }

        let overlaps_x = next.x + AGENT_WIDTH > platform.x && next.x < platform.x + platform.width;
        let was_above = feet_before <= platform.y + EDGE_EPSILON;
        let crosses_top = next.y + AGENT_HEIGHT > platform.y;

        if overlaps_x && was_above && crosses_top {
            next.y = platform.y - AGENT_HEIGHT;
            on_ground = true;

            bounced = template.kind.is_bouncy();
            vel.y = if bounced { BOUNCY_JUMP_FORCE } else { 0.0 };

            if template.carries_horizontally() {
                carry = platform.x - template.x;
            }
        }
    }

    if carry != 0.0 {
        next.x += carry;
    }

    next.x = next.x.clamp(0.0, GAME_WIDTH - AGENT_WIDTH);
    if next.y + AGENT_HEIGHT > GAME_HEIGHT {
        next.y = GAME_HEIGHT - AGENT_HEIGHT;
        vel.y = 0.0;
        on_ground = true;
        bounced = false;
    }
    if next.y < 0.0 {
        next.y = 0.0;
        vel.y = 0.0;
    }

    CollisionResult {
        pos: next,
        vel,
        on_ground,
        carry,
        bounced,
    }
}
