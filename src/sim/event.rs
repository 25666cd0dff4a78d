//! Events emitted by the simulation for the presentation layer

use serde::{Deserialize, Serialize};

use super::state::AgentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An agent left the ground under its own power
    Jumped { agent: AgentId },
    /// An agent landed on a mushroom and was launched upward
    Bounced { agent: AgentId },
    /// "It" moved from `tagger` to `tagee`
    Tagged { tagger: AgentId, tagee: AgentId },
    /// Pre-round countdown advanced
    CountdownTick { remaining: u32 },
    RoundStarted,
    /// Round clock advanced
    TimeTick { remaining: u32 },
    /// Time ran out while `loser` was "it"
    RoundOver { loser: Option<AgentId> },
}
