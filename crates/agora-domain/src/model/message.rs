//! DebateMessage / DebateResult - What a debate produces
//!
//! A run with R rounds produces exactly 3R messages followed by one result.
//! Messages are immutable once produced; ownership moves to the consumer.

use super::agent::Agent;

/// One agent's contribution in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateMessage {
    pub agent: Agent,
    pub message: String,
    /// 1-based round number
    pub round: u32,
}

impl DebateMessage {
    pub fn new(agent: Agent, message: impl Into<String>, round: u32) -> Self {
        Self {
            agent,
            message: message.into(),
            round,
        }
    }
}

/// The closing output of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateResult {
    pub summary: String,
}
