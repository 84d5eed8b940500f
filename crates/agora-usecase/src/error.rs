//! Error types for debate runs

use thiserror::Error;

use crate::scheduler::DebateState;

/// Caller input rejected before anything is emitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Debate topic must not be empty")]
    EmptyTopic,

    #[error("A debate needs at least one round")]
    ZeroRounds,

    #[error("Thinking range is inverted: min {min_ms}ms > max {max_ms}ms")]
    InvalidThinkingRange { min_ms: u64, max_ms: u64 },
}

/// General debate error type
#[derive(Debug, Error)]
pub enum DebateError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Scheduler is {state}; reset it or create a new one before starting another run")]
    NotIdle { state: DebateState },

    #[error("Message sink closed after {delivered} messages")]
    SinkClosed { delivered: usize },

    #[error("Debate task aborted: {0}")]
    Aborted(String),
}

pub type Result<T> = std::result::Result<T, DebateError>;
