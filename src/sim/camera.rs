//! Camera framing
//!
//! Fits a padded bounding box around every agent into the fixed world aspect,
//! zooming out no further than 0.4x and never zooming in past 1:1.

use serde::{Deserialize, Serialize};

use super::state::Agent;
use crate::consts::*;

/// Visible world rectangle (an SVG-style view box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The whole world at 1:1
    pub fn full_world() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
        }
    }

    /// World-to-screen scale for a screen the size of the world
    pub fn scale(&self) -> f32 {
        GAME_WIDTH / self.width
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Frame every agent with padding, centered on their bounding box
pub fn frame_agents(agents: &[Agent]) -> Viewport {
    if agents.is_empty() {
        return Viewport::full_world();
    }

    let (mut min_x, mut max_x) = (f32::INFINITY, f32::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f32::INFINITY, f32::NEG_INFINITY);
    for agent in agents {
        min_x = min_x.min(agent.pos.x);
        max_x = max_x.max(agent.pos.x + AGENT_WIDTH);
        min_y = min_y.min(agent.pos.y);
        max_y = max_y.max(agent.pos.y + AGENT_HEIGHT);
    }

    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;
    let width = max_x - min_x + CAMERA_PADDING * 2.0;
    let height = max_y - min_y + CAMERA_PADDING * 2.0;

    let scale = (GAME_WIDTH / width)
        .min(GAME_HEIGHT / height)
        .clamp(CAMERA_MIN_SCALE, CAMERA_MAX_SCALE);

    let view_width = GAME_WIDTH / scale;
    let view_height = GAME_HEIGHT / scale;
    Viewport {
        x: mid_x - view_width / 2.0,
        y: mid_y - view_height / 2.0,
        width: view_width,
        height: view_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn at(x: f32, y: f32) -> Agent {
        Agent::new(0, Vec2::new(x, y), true)
    }

    #[test]
    fn test_close_agents_do_not_zoom_past_one() {
        let view = frame_agents(&[at(700.0, 400.0), at(760.0, 420.0)]);
        assert_eq!(view.width, GAME_WIDTH);
        assert_eq!(view.height, GAME_HEIGHT);
        assert_eq!(view.scale(), 1.0);

        // Centered on the bounding box
        let center_x = (700.0 + 760.0 + AGENT_WIDTH) / 2.0;
        let center_y = (400.0 + 420.0 + AGENT_HEIGHT) / 2.0;
        assert!((view.x + view.width / 2.0 - center_x).abs() < 1e-3);
        assert!((view.y + view.height / 2.0 - center_y).abs() < 1e-3);
    }

    #[test]
    fn test_spread_agents_zoom_out() {
        let view = frame_agents(&[at(0.0, 850.0), at(1560.0, 850.0)]);
        // Box is 2100 wide with padding: scale = 1600 / 2100
        let expected = GAME_WIDTH / (1600.0 + CAMERA_PADDING * 2.0);
        assert!((view.scale() - expected).abs() < 1e-4);
        assert!((view.width / view.height - GAME_WIDTH / GAME_HEIGHT).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_out_clamped() {
        let view = frame_agents(&[at(-5000.0, 0.0), at(5000.0, 3000.0)]);
        assert!((view.width - GAME_WIDTH / CAMERA_MIN_SCALE).abs() < 1e-2);
        assert!((view.height - GAME_HEIGHT / CAMERA_MIN_SCALE).abs() < 1e-2);
    }

    #[test]
    fn test_no_agents_shows_world() {
        assert_eq!(frame_agents(&[]), Viewport::full_world());
        assert_eq!(Viewport::full_world().to_string(), "0 0 1600 900");
    }
}
