//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (by agent ID)
//! - No rendering or platform dependencies

pub mod camera;
pub mod clock;
pub mod collision;
pub mod controller;
pub mod event;
pub mod input;
pub mod kinematics;
pub mod physics;
pub mod state;
pub mod tag;
pub mod tick;

pub use camera::{Viewport, frame_agents};
pub use clock::RoundClock;
pub use collision::{CollisionResult, resolve_collisions};
pub use controller::{Intent, ai_intent, human_intent};
pub use event::GameEvent;
pub use input::{InputState, Key};
pub use kinematics::{platform_instance, platform_instances, platform_position};
pub use physics::integrate;
pub use state::{
    Agent, AgentId, Axis, Frame, Movement, Platform, PlatformInstance, PlatformKind, RoundOutcome,
    RoundPhase, RoundState,
};
pub use tag::{TagTransfer, resolve_tag};
pub use tick::tick;
