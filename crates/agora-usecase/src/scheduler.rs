//! DebateScheduler - Round-robin turn taking with simulated thinking
//!
//! The scheduler is a one-shot state machine:
//!
//! ```text
//! Idle ──run()──► Running ──► Completed
//!                    │
//!                    └──────► Failed
//! ```
//!
//! Turns are strictly sequential. Within a run the only suspension
//! points are the thinking delay before each message and the settle
//! delay before the summary.

use std::time::Duration;

use agora_domain::service::context::SnippetSource;
use agora_domain::{
    Agent, ContextProvider, DebateMessage, DebateResult, DocumentSource, MessageSynthesizer,
    RandomSource, SummaryComposer,
};
use tracing::{debug, info, warn};

use crate::config::DebateConfig;
use crate::error::{DebateError, Result, ValidationError};
use crate::sink::MessageSink;

/// Lifecycle of a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebateState {
    /// Ready to start a run
    Idle,
    /// A run is in flight
    Running,
    /// The last run produced a summary (terminal)
    Completed,
    /// The last run aborted (terminal)
    Failed,
}

impl DebateState {
    /// Whether this is a terminal state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl core::fmt::Display for DebateState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Completed => write!(f, "Completed"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Reject input that must never reach the engine
pub fn validate(
    topic: &str,
    rounds: u32,
    config: &DebateConfig,
) -> std::result::Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::EmptyTopic);
    }
    if rounds == 0 {
        return Err(ValidationError::ZeroRounds);
    }
    config.validate()
}

/// Drives one debate: agents × rounds, then the summary
///
/// Generic over the document store `S` and the random source `R` so
/// tests can pin both.
pub struct DebateScheduler<S, R> {
    turns: Turns<S, R>,
    state: DebateState,
}

/// Everything a run needs besides the lifecycle state
struct Turns<S, R> {
    context: ContextProvider<S>,
    synthesizer: MessageSynthesizer,
    composer: SummaryComposer,
    config: DebateConfig,
    rng: R,
}

/// Marks the scheduler `Running` for the lifetime of one run
///
/// A run that is dropped before it settles (its future abandoned by the
/// caller) leaves the scheduler `Failed`, not stuck in `Running`.
struct RunGuard<'a> {
    state: &'a mut DebateState,
}

impl<'a> RunGuard<'a> {
    fn start(state: &'a mut DebateState) -> Self {
        *state = DebateState::Running;
        Self { state }
    }

    fn settle(self, outcome: DebateState) {
        *self.state = outcome;
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if *self.state == DebateState::Running {
            warn!("Debate abandoned mid-run");
            *self.state = DebateState::Failed;
        }
    }
}

impl<S: DocumentSource, R: RandomSource> DebateScheduler<S, R> {
    /// Create a scheduler over the standard personas with default pacing
    pub fn new(documents: S, rng: R) -> Self {
        Self {
            turns: Turns {
                context: ContextProvider::new(documents),
                synthesizer: MessageSynthesizer::default(),
                composer: SummaryComposer::new(),
                config: DebateConfig::default(),
                rng,
            },
            state: DebateState::Idle,
        }
    }

    /// Builder: set pacing
    pub fn with_config(mut self, config: DebateConfig) -> Self {
        self.turns.config = config;
        self
    }

    // ========== Getters ==========

    pub fn state(&self) -> DebateState {
        self.state
    }

    pub fn config(&self) -> &DebateConfig {
        &self.turns.config
    }

    /// Return to `Idle` so the scheduler can run again
    pub fn reset(&mut self) {
        self.state = DebateState::Idle;
    }

    /// Run a full debate, pushing each message to `sink` as it is produced
    ///
    /// Validation happens before the first message. If the sink closes
    /// mid-run, or the returned future is dropped before it resolves, the
    /// scheduler moves to `Failed`; messages already delivered stay
    /// delivered.
    pub async fn run<K: MessageSink + ?Sized>(
        &mut self,
        topic: &str,
        rounds: u32,
        sink: &mut K,
    ) -> Result<DebateResult> {
        if self.state != DebateState::Idle {
            return Err(DebateError::NotIdle { state: self.state });
        }
        validate(topic, rounds, &self.turns.config)?;

        let guard = RunGuard::start(&mut self.state);
        info!("Debate started: \"{}\" ({} rounds)", topic, rounds);

        match self.turns.drive(topic, rounds, sink).await {
            Ok(result) => {
                guard.settle(DebateState::Completed);
                info!(
                    "Debate completed after {} messages",
                    rounds as usize * Agent::ORDER.len()
                );
                Ok(result)
            }
            Err(err) => {
                guard.settle(DebateState::Failed);
                warn!("Debate failed: {}", err);
                Err(err)
            }
        }
    }
}

impl<S: DocumentSource, R: RandomSource> Turns<S, R> {
    async fn drive<K: MessageSink + ?Sized>(
        &mut self,
        topic: &str,
        rounds: u32,
        sink: &mut K,
    ) -> Result<DebateResult> {
        let mut delivered = 0usize;

        for round in 1..=rounds {
            for &agent in Agent::all() {
                let thinking = self.thinking_delay();
                debug!("{} thinking for {:?} (round {})", agent, thinking, round);
                tokio::time::sleep(thinking).await;

                let message = self.take_turn(agent, topic, round);
                sink.deliver(message).map_err(|_| DebateError::SinkClosed { delivered })?;
                delivered += 1;
                debug!("Delivered message {} ({} / round {})", delivered, agent, round);
            }
        }

        tokio::time::sleep(self.config.settle()).await;
        Ok(DebateResult {
            summary: self.composer.compose(topic, rounds),
        })
    }

    /// Retrieve context and render one statement
    fn take_turn(&mut self, agent: Agent, topic: &str, round: u32) -> DebateMessage {
        let snippet = self.context.retrieve(&mut self.rng);
        if let SnippetSource::Unreadable(err) = snippet.source() {
            warn!("Knowledge base unreadable, using fallback context: {}", err);
        }

        let text = self
            .synthesizer
            .render(agent, topic, snippet.text(), &mut self.rng);
        DebateMessage::new(agent, text, round)
    }

    fn thinking_delay(&mut self) -> Duration {
        Duration::from_millis(
            self.rng
                .between(self.config.thinking_min_ms, self.config.thinking_max_ms),
        )
    }
}
