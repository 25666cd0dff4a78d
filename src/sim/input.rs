//! Human input latch
//!
//! Key-down sets a flag, key-up clears movement flags. The jump request is
//! edge-triggered and only cleared when a tick actually applies it, so a jump
//! pressed mid-air is kept until landing but never applied twice.

use serde::{Deserialize, Serialize};

/// Logical keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a keyboard key name to a game key (arrows, WASD, space)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "ArrowUp" | "w" | "W" | " " | "Space" => Some(Key::Jump),
            _ => None,
        }
    }
}

/// Per-agent input flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_requested: bool,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.move_left = true,
            Key::Right => self.move_right = true,
            Key::Jump => self.jump_requested = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.move_left = false,
            Key::Right => self.move_right = false,
            // Consumed by the tick that applies it
            Key::Jump => {}
        }
    }

    /// Mark the pending jump as applied
    pub fn consume_jump(&mut self) {
        self.jump_requested = false;
    }
}
