//! Bunny Tag - a real-time platformer tag game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platforms, agents, collisions, tagging, round clock)
//! - `maps`: Built-in map catalog and map loading
//! - `settings`: Round settings (player count, duration, map)
//! - `driver`: Fixed-timestep tick driver that owns a round

pub mod driver;
pub mod maps;
pub mod settings;
pub mod sim;

pub use driver::RoundDriver;
pub use maps::{MapCatalog, MapData};
pub use settings::RoundSettings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per display frame)
    pub const TICK_RATE_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the driver accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions (top-left origin, y grows downward)
    pub const GAME_WIDTH: f32 = 1600.0;
    pub const GAME_HEIGHT: f32 = 900.0;

    /// Agent hitbox
    pub const AGENT_WIDTH: f32 = 40.0;
    pub const AGENT_HEIGHT: f32 = 50.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    pub const MAX_FALL_SPEED: f32 = 15.0;
    /// Horizontal run speed (units/tick)
    pub const AGENT_SPEED: f32 = 7.0;
    pub const JUMP_FORCE: f32 = -18.0;
    /// Vertical velocity after landing on a mushroom
    pub const BOUNCY_JUMP_FORCE: f32 = -28.0;

    /// Ticks a tagger and tagee wait before the next transfer (2s at 60 Hz)
    pub const TAG_COOLDOWN_TICKS: u32 = 120;

    /// Seconds shown before play starts
    pub const COUNTDOWN_SECONDS: u32 = 3;

    /// Camera framing
    pub const CAMERA_PADDING: f32 = 250.0;
    pub const CAMERA_MIN_SCALE: f32 = 0.4;
    pub const CAMERA_MAX_SCALE: f32 = 1.0;

    /// Agents spawn this far above their spawn platform
    pub const SPAWN_DROP: f32 = 20.0;
    /// Platforms whose top is within this distance of the bottom are not spawn points
    pub const SPAWN_FLOOR_MARGIN: f32 = 50.0;

    /// Converts (frame + offset) * speed into radians
    pub const PLATFORM_PHASE_SCALE: f32 = 0.01;

    /// Player count limits
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 10;
}
