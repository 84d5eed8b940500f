//! Pacing configuration for a debate run

use std::time::Duration;

use crate::error::ValidationError;

/// Simulated delays, in milliseconds
///
/// Each turn waits for a thinking interval drawn uniformly from
/// `thinking_min_ms..thinking_max_ms`; the summary waits `settle_ms`
/// after the last turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebateConfig {
    pub thinking_min_ms: u64,
    pub thinking_max_ms: u64,
    pub settle_ms: u64,
}

impl DebateConfig {
    pub const DEFAULT_THINKING_MIN_MS: u64 = 1000;
    pub const DEFAULT_THINKING_MAX_MS: u64 = 2000;
    pub const DEFAULT_SETTLE_MS: u64 = 1500;

    /// No delays at all
    pub fn instant() -> Self {
        Self {
            thinking_min_ms: 0,
            thinking_max_ms: 0,
            settle_ms: 0,
        }
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.thinking_min_ms > self.thinking_max_ms {
            return Err(ValidationError::InvalidThinkingRange {
                min_ms: self.thinking_min_ms,
                max_ms: self.thinking_max_ms,
            });
        }
        Ok(())
    }
}

impl Default for DebateConfig {
    fn default() -> Self {
        Self {
            thinking_min_ms: Self::DEFAULT_THINKING_MIN_MS,
            thinking_max_ms: Self::DEFAULT_THINKING_MAX_MS,
            settle_ms: Self::DEFAULT_SETTLE_MS,
        }
    }
}
