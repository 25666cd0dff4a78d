//! Round state and core simulation types
//!
//! A `RoundState` is the whole context of one round: it is built from the
//! settings and map, owned by the tick driver, and replaced on restart.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::camera::{Viewport, frame_agents};
use super::clock::{ClockTick, RoundClock};
use super::event::GameEvent;
use super::input::{InputState, Key};
use super::kinematics::platform_instances;
use crate::consts::*;
use crate::maps::MapData;
use crate::settings::RoundSettings;

pub type AgentId = u32;

/// Display names by agent index; agent 0 is always "You"
pub const AGENT_NAMES: [&str; 10] = [
    "Bunny",
    "Hops",
    "Fluffy",
    "Cottontail",
    "Thumper",
    "Jumper",
    "Nibbles",
    "Shadow",
    "Dash",
    "Bolt",
];

pub const AGENT_COLORS: [&str; 10] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#A133FF", "#33FFA1", "#FFC300", "#C70039",
    "#900C3F", "#581845",
];

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Pre-round countdown; agents are frozen
    Countdown,
    /// Active gameplay
    Playing,
    /// Time ran out
    GameOver,
}

/// A player or AI-controlled bunny
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub color: String,
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub is_it: bool,
    pub on_ground: bool,
    pub is_ai: bool,
    /// Ticks left before this agent can tag again
    pub tag_cooldown: u32,
}

impl Agent {
    pub fn new(id: AgentId, pos: Vec2, is_ai: bool) -> Self {
        let index = id as usize;
        let name = if is_ai {
            AGENT_NAMES[index % AGENT_NAMES.len()].to_string()
        } else {
            "You".to_string()
        };
        Self {
            id,
            name,
            color: AGENT_COLORS[index % AGENT_COLORS.len()].to_string(),
            pos,
            vel: Vec2::ZERO,
            is_it: false,
            on_ground: false,
            is_ai,
            tag_cooldown: 0,
        }
    }

    /// Hitbox size
    #[inline]
    pub fn size() -> Vec2 {
        Vec2::new(AGENT_WIDTH, AGENT_HEIGHT)
    }

    /// Coarse bounding-box touch against another agent
    pub fn touches(&self, other: &Agent) -> bool {
        let gap = (self.pos - other.pos).abs();
        let size = Self::size();
        gap.x < size.x && gap.y < size.y
    }
}

/// Platform surface types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    #[default]
    #[serde(alias = "default")]
    Solid,
    /// Launches anything that lands on it
    Mushroom,
}

impl PlatformKind {
    pub fn is_bouncy(self) -> bool {
        self == PlatformKind::Mushroom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Periodic platform motion: `sin((frame + offset) * speed * 0.01) * distance`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub axis: Axis,
    /// Amplitude in world units
    pub distance: f32,
    /// Angular speed
    pub speed: f32,
    /// Phase offset in frames, de-syncs platforms sharing a waveform
    #[serde(default)]
    pub offset: f32,
}

/// Immutable platform template from a map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub kind: PlatformKind,
    #[serde(default)]
    pub movement: Option<Movement>,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind: PlatformKind::Solid,
            movement: None,
        }
    }

    pub fn mushroom(mut self) -> Self {
        self.kind = PlatformKind::Mushroom;
        self
    }

    pub fn moving(mut self, axis: Axis, distance: f32, speed: f32, offset: f32) -> Self {
        self.movement = Some(Movement {
            axis,
            distance,
            speed,
            offset,
        });
        self
    }

    /// Platforms with no area never collide
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Whether standing on this platform moves the agent sideways
    pub fn carries_horizontally(&self) -> bool {
        matches!(
            self.movement,
            Some(Movement {
                axis: Axis::Horizontal,
                ..
            })
        )
    }
}

/// Where a platform is on a given frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Final result of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The agent left holding "it"
    pub loser: Option<AgentId>,
    pub winners: Vec<AgentId>,
}

/// Published per-tick snapshot for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub frame: u64,
    pub phase: RoundPhase,
    pub countdown: u32,
    pub time_left: u32,
    pub agents: Vec<Agent>,
    pub platforms: Vec<PlatformInstance>,
    pub viewport: Viewport,
    pub outcome: Option<RoundOutcome>,
}

/// Complete round state (deterministic given the injected RNG)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub settings: RoundSettings,
    /// Map actually in use (after fallback)
    pub map_id: String,
    /// Simulation tick counter, drives platform motion
    pub frame: u64,
    pub clock: RoundClock,
    /// Sorted by id
    pub agents: Vec<Agent>,
    /// Platform templates in map order
    pub templates: Vec<Platform>,
    /// Platform positions for the current frame, parallel to `templates`
    pub platforms: Vec<PlatformInstance>,
    /// Input latch per agent, parallel to `agents`
    pub inputs: Vec<InputState>,
    pub viewport: Viewport,
    pub outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// Create a round in the Countdown phase with freshly spawned agents
    pub fn new<R: Rng>(settings: &RoundSettings, map: &MapData, rng: &mut R) -> Self {
        let settings = settings.clone().validated();
        let agents = spawn_agents(settings.player_count, map, rng);
        let templates = map.platforms.clone();
        let platforms = platform_instances(&templates, 0);

        if let Some(it) = agents.iter().find(|a| a.is_it) {
            log::info!(
                "Round on '{}' with {} agents, {} s; {} is it",
                map.id,
                agents.len(),
                settings.round_secs,
                it.name
            );
        }

        Self {
            map_id: map.id.clone(),
            frame: 0,
            clock: RoundClock::new(settings.round_secs),
            inputs: vec![InputState::default(); agents.len()],
            agents,
            templates,
            platforms,
            viewport: Viewport::full_world(),
            outcome: None,
            settings,
        }
    }

    /// Throw this round away and start a new one with the same settings
    pub fn restart<R: Rng>(&mut self, map: &MapData, rng: &mut R) {
        *self = Self::new(&self.settings, map, rng);
    }

    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.clock.phase
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn it_agent(&self) -> Option<&Agent> {
        self.agents.iter().find(|a| a.is_it)
    }

    /// Key pressed by a human agent; ignored outside Playing
    pub fn key_down(&mut self, id: AgentId, key: Key) {
        if let Some(input) = self.human_input_mut(id) {
            input.press(key);
        }
    }

    /// Key released by a human agent; never clears a pending jump
    pub fn key_up(&mut self, id: AgentId, key: Key) {
        if let Some(input) = self.human_input_mut(id) {
            input.release(key);
        }
    }

    fn human_input_mut(&mut self, id: AgentId) -> Option<&mut InputState> {
        if self.clock.phase != RoundPhase::Playing {
            return None;
        }
        let index = self.agents.iter().position(|a| a.id == id && !a.is_ai)?;
        self.inputs.get_mut(index)
    }

    /// Advance the one-second timers (countdown or round clock)
    pub fn second_elapsed(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.clock.second_elapsed() {
            ClockTick::Idle => {}
            ClockTick::Countdown { remaining } => {
                events.push(GameEvent::CountdownTick { remaining });
            }
            ClockTick::Started => {
                log::info!("Round started");
                events.push(GameEvent::CountdownTick { remaining: 0 });
                events.push(GameEvent::RoundStarted);
            }
            ClockTick::Remaining { secs } => {
                events.push(GameEvent::TimeTick { remaining: secs });
            }
            ClockTick::Expired => {
                let outcome = self.compute_outcome();
                match outcome.loser.and_then(|id| self.agent(id)) {
                    Some(loser) => log::info!("Round over, {} was left it", loser.name),
                    None => log::warn!("Round over with nobody it"),
                }
                events.push(GameEvent::TimeTick { remaining: 0 });
                events.push(GameEvent::RoundOver {
                    loser: outcome.loser,
                });
                self.outcome = Some(outcome);
                self.viewport = Viewport::full_world();
            }
        }
        events
    }

    fn compute_outcome(&self) -> RoundOutcome {
        RoundOutcome {
            loser: self.it_agent().map(|a| a.id),
            winners: self
                .agents
                .iter()
                .filter(|a| !a.is_it)
                .map(|a| a.id)
                .collect(),
        }
    }

    /// Refresh the camera for the current phase
    pub fn update_viewport(&mut self) {
        self.viewport = if self.clock.phase == RoundPhase::Playing {
            frame_agents(&self.agents)
        } else {
            Viewport::full_world()
        };
    }

    /// Snapshot everything the presentation layer draws
    pub fn snapshot(&self) -> Frame {
        Frame {
            frame: self.frame,
            phase: self.clock.phase,
            countdown: self.clock.countdown,
            time_left: self.clock.time_left,
            agents: self.agents.clone(),
            platforms: self.platforms.clone(),
            viewport: self.viewport,
            outcome: self.outcome.clone(),
        }
    }
}

/// Spawn agents round-robin over the map's spawn platforms and pick who is "it"
fn spawn_agents<R: Rng>(count: usize, map: &MapData, rng: &mut R) -> Vec<Agent> {
    let spawns = map.spawn_platforms();

    let mut agents: Vec<Agent> = (0..count)
        .map(|i| {
            let platform = if spawns.is_empty() {
                map.platforms.first()
            } else {
                spawns.get(i % spawns.len()).copied()
            };
            let pos = match platform {
                Some(p) => Vec2::new(
                    p.x + p.width / 2.0 - AGENT_WIDTH / 2.0,
                    p.y - AGENT_HEIGHT - SPAWN_DROP,
                ),
                None => Vec2::new(GAME_WIDTH / 2.0 - AGENT_WIDTH / 2.0, 0.0),
            };
            Agent::new(i as AgentId, pos, i != 0)
        })
        .collect();

    if !agents.is_empty() {
        let first_it = rng.random_range(0..agents.len());
        agents[first_it].is_it = true;
    }
    agents
}
