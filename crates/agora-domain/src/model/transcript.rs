//! Transcript - The ordered record of one debate
//!
//! Presentation collaborators read it to render messages, compute the
//! per-agent tally, or export the whole exchange.

use super::agent::Agent;
use super::message::{DebateMessage, DebateResult};

/// Topic, messages so far, and the summary once the run completes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    topic: String,
    messages: Vec<DebateMessage>,
    summary: Option<String>,
}

impl Transcript {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            messages: Vec::new(),
            summary: None,
        }
    }

    // ========== Getters ==========

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn messages(&self) -> &[DebateMessage] {
        &self.messages
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    // ========== Updates ==========

    pub fn push(&mut self, message: DebateMessage) {
        self.messages.push(message);
    }

    pub fn complete(&mut self, result: DebateResult) {
        self.summary = Some(result.summary);
    }

    // ========== Views ==========

    /// Round of the latest message, 0 before the first one arrives
    pub fn current_round(&self) -> u32 {
        self.messages.last().map(|m| m.round).unwrap_or(0)
    }

    /// Message count per agent, in speaking order, zero-filled
    pub fn agent_counts(&self) -> [(Agent, usize); 3] {
        let mut counts = Agent::ORDER.map(|agent| (agent, 0));
        for message in &self.messages {
            counts[message.agent.position()].1 += 1;
        }
        counts
    }
}
