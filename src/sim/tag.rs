//! Tag resolution
//!
//! Runs on collision-corrected positions. Only "it" can tag, only once its
//! cooldown has run out, and at most one transfer happens per tick.

use serde::{Deserialize, Serialize};

use super::state::{Agent, AgentId};
use crate::consts::TAG_COOLDOWN_TICKS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTransfer {
    pub tagger: AgentId,
    pub tagee: AgentId,
}

/// Transfer "it" if the current holder touches a runner.
///
/// `agents` holds this tick's corrected positions and `prev` the same agents
/// before the tick; the holder's cooldown is read from `prev`. Agents are
/// scanned in slice order, which is ascending id.
pub fn resolve_tag(prev: &[Agent], agents: &mut [Agent]) -> Option<TagTransfer> {
    let tagger_idx = agents.iter().position(|a| a.is_it)?;
    let cooldown = prev.get(tagger_idx).map_or(0, |a| a.tag_cooldown);
    if cooldown > 0 {
        return None;
    }

    let tagee_idx = agents
        .iter()
        .enumerate()
        .position(|(i, other)| {
            i != tagger_idx && !other.is_it && agents[tagger_idx].touches(other)
        })?;

    let transfer = TagTransfer {
        tagger: agents[tagger_idx].id,
        tagee: agents[tagee_idx].id,
    };

    let tagger = &mut agents[tagger_idx];
    tagger.is_it = false;
    tagger.tag_cooldown = TAG_COOLDOWN_TICKS;

    let tagee = &mut agents[tagee_idx];
    tagee.is_it = true;
    tagee.tag_cooldown = TAG_COOLDOWN_TICKS;

    log::debug!("Agent {} tagged agent {}", transfer.tagger, transfer.tagee);
    Some(transfer)
}
