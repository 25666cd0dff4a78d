//! Platform kinematics
//!
//! A moving platform's position is a pure function of its template and the
//! frame counter, so any frame can be replayed without stored state.

use glam::Vec2;

use super::state::{Axis, Platform, PlatformInstance};
use crate::consts::PLATFORM_PHASE_SCALE;

/// Position of a platform's top-left corner on `frame`
pub fn platform_position(platform: &Platform, frame: u64) -> Vec2 {
    let base = Vec2::new(platform.x, platform.y);
    let Some(movement) = platform.movement else {
        return base;
    };

    let phase = (frame as f32 + movement.offset) * movement.speed * PLATFORM_PHASE_SCALE;
    let displacement = phase.sin() * movement.distance;
    match movement.axis {
        Axis::Horizontal => base + Vec2::new(displacement, 0.0),
        Axis::Vertical => base + Vec2::new(0.0, displacement),
    }
}

/// Platform instance for `frame`
pub fn platform_instance(platform: &Platform, frame: u64) -> PlatformInstance {
    let pos = platform_position(platform, frame);
    PlatformInstance {
        x: pos.x,
        y: pos.y,
        width: platform.width,
        height: platform.height,
    }
}

/// Instances for every template, in template order
pub fn platform_instances(templates: &[Platform], frame: u64) -> Vec<PlatformInstance> {
    templates
        .iter()
        .map(|p| platform_instance(p, frame))
        .collect()
}
