//! Agent - One of the three fixed debate roles
//!
//! Agent is a Value Object - two agents with the same variant are equal.
//! The set is closed: agents are never created or destroyed at runtime,
//! so every lookup keyed by `Agent` is exhaustive and cannot fail.

use core::str::FromStr;

/// The three debaters, in speaking order
///
/// - Engineer = the pragmatic, technical voice
/// - Visionary = the speculative, innovative voice
/// - Ethicist = the normative, ethical voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Agent {
    /// Feasibility, implementation details, resource constraints
    Engineer,

    /// Transformation, future possibilities, thinking beyond constraints
    Visionary,

    /// Fairness, accountability, societal impact
    Ethicist,
}

impl Agent {
    /// Speaking order within every round
    pub const ORDER: [Agent; 3] = [Agent::Engineer, Agent::Visionary, Agent::Ethicist];

    /// Get the display name of this agent
    pub fn display_name(&self) -> &'static str {
        match self {
            Agent::Engineer => "Engineer",
            Agent::Visionary => "Visionary",
            Agent::Ethicist => "Ethicist",
        }
    }

    /// Get all agents in speaking order
    pub fn all() -> &'static [Agent] {
        &Self::ORDER
    }

    /// Position of this agent within a round (0-based)
    pub fn position(&self) -> usize {
        match self {
            Agent::Engineer => 0,
            Agent::Visionary => 1,
            Agent::Ethicist => 2,
        }
    }
}

impl core::fmt::Display for Agent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raised when a string-keyed lookup names an agent outside the fixed set
///
/// Only reachable at boundaries that accept free text (CLI flags,
/// stored transcripts). Inside the engine agents are always `Agent` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAgentError {
    pub name: String,
}

impl core::fmt::Display for UnknownAgentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Unknown agent '{}'. Available agents: Engineer, Visionary, Ethicist",
            self.name
        )
    }
}

impl std::error::Error for UnknownAgentError {}

impl FromStr for Agent {
    type Err = UnknownAgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Agent::all()
            .iter()
            .copied()
            .find(|agent| agent.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAgentError {
                name: s.to_string(),
            })
    }
}
