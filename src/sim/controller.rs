//! Agent controllers: turn keyboard state or AI decisions into velocity
//!
//! AI agents read a single pre-tick snapshot of every agent, so the order in
//! which agents are processed never changes what they decide.

use glam::Vec2;
use rand::Rng;

use super::input::InputState;
use super::state::Agent;
use crate::consts::{AGENT_SPEED, JUMP_FORCE};

/// Chaser only jumps for targets more than this far above it
pub const CHASE_JUMP_HEIGHT: f32 = 50.0;
/// Chaser only jumps for targets closer than this horizontally
pub const CHASE_JUMP_RANGE: f32 = 300.0;
pub const CHASE_JUMP_CHANCE: f32 = 0.03;
/// Fleeing agents run when "it" is closer than this horizontally
pub const FLEE_RADIUS: f32 = 300.0;
pub const PANIC_RADIUS: f32 = 100.0;
pub const PANIC_JUMP_CHANCE: f32 = 0.05;
/// Per-tick horizontal decay while coasting
pub const COAST_DECAY: f32 = 0.95;
pub const COAST_EPSILON: f32 = 0.1;

/// Desired velocity for this tick, before gravity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub vel: Vec2,
    /// A jump impulse was applied
    pub jumped: bool,
}

/// Human control: right beats left, jumps only from the ground
pub fn human_intent(agent: &Agent, input: &InputState) -> Intent {
    let vx = if input.move_right {
        AGENT_SPEED
    } else if input.move_left {
        -AGENT_SPEED
    } else {
        0.0
    };

    let jumped = input.jump_requested && agent.on_ground;
    let vy = if jumped { JUMP_FORCE } else { agent.vel.y };

    Intent {
        vel: Vec2::new(vx, vy),
        jumped,
    }
}

/// AI control: chase the nearest runner while "it", otherwise flee from "it"
pub fn ai_intent<R: Rng>(agent: &Agent, snapshot: &[Agent], rng: &mut R) -> Intent {
    if agent.is_it {
        chase(agent, snapshot, rng)
    } else {
        flee(agent, snapshot, rng)
    }
}

fn chase<R: Rng>(agent: &Agent, snapshot: &[Agent], rng: &mut R) -> Intent {
    let mut intent = Intent {
        vel: agent.vel,
        jumped: false,
    };

    // First of equally near runners wins
    let target = snapshot
        .iter()
        .filter(|other| !other.is_it && other.id != agent.id)
        .min_by(|a, b| {
            let dist_a = a.pos.distance(agent.pos);
            let dist_b = b.pos.distance(agent.pos);
            dist_a
                .partial_cmp(&dist_b)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    let Some(target) = target else {
        return intent;
    };

    let direction = direction_to(agent, target);
    let distance_x = (target.pos.x - agent.pos.x).abs();
    let distance_y = target.pos.y - agent.pos.y;

    intent.vel.x = AGENT_SPEED * direction;

    if agent.on_ground
        && distance_y < -CHASE_JUMP_HEIGHT
        && distance_x < CHASE_JUMP_RANGE
        && rng.random::<f32>() < CHASE_JUMP_CHANCE
    {
        intent.vel.y = JUMP_FORCE;
        intent.jumped = true;
    }
    intent
}

fn flee<R: Rng>(agent: &Agent, snapshot: &[Agent], rng: &mut R) -> Intent {
    let mut intent = Intent {
        vel: agent.vel,
        jumped: false,
    };

    let Some(chaser) = snapshot.iter().find(|other| other.is_it && other.id != agent.id) else {
        return intent;
    };

    let direction = direction_to(agent, chaser);
    let distance_x = (chaser.pos.x - agent.pos.x).abs();

    if distance_x < FLEE_RADIUS {
        intent.vel.x = -AGENT_SPEED * direction;
        if distance_x < PANIC_RADIUS && agent.on_ground && rng.random::<f32>() < PANIC_JUMP_CHANCE
        {
            intent.vel.y = JUMP_FORCE;
            intent.jumped = true;
        }
    } else {
        // Out of danger: coast to a stop
        intent.vel.x = agent.vel.x * COAST_DECAY;
        if agent.on_ground && intent.vel.x.abs() < COAST_EPSILON {
            intent.vel.x = 0.0;
        }
    }
    intent
}

/// +1 when `target` is to the right, -1 otherwise
#[inline]
fn direction_to(agent: &Agent, target: &Agent) -> f32 {
    if target.pos.x > agent.pos.x { 1.0 } else { -1.0 }
}
