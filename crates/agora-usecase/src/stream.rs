//! Streaming entry point for presentation layers
//!
//! `start_debate` validates up front, then runs the scheduler on its own
//! task. Messages arrive on a channel; the result arrives on the join
//! handle. Dropping the receiver cancels the run at the next delivery.

use agora_domain::{DebateMessage, DebateResult, DocumentSource, RandomSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::error::{DebateError, Result};
use crate::scheduler::{validate, DebateScheduler};

/// A debate in flight
pub struct DebateStream {
    /// Messages in emission order
    pub messages: mpsc::UnboundedReceiver<DebateMessage>,
    /// Resolves once, after the last message
    pub result: JoinHandle<Result<DebateResult>>,
}

impl DebateStream {
    /// Wait for the final result
    pub async fn finish(self) -> Result<DebateResult> {
        self.result
            .await
            .map_err(|e| DebateError::Aborted(e.to_string()))?
    }
}

/// Start a debate on the current tokio runtime
///
/// Fails fast on invalid input: nothing is spawned and no message is
/// emitted.
pub fn start_debate<S, R>(
    mut scheduler: DebateScheduler<S, R>,
    topic: impl Into<String>,
    rounds: u32,
) -> Result<DebateStream>
where
    S: DocumentSource + Send + 'static,
    R: RandomSource + Send + 'static,
{
    let topic = topic.into();
    validate(&topic, rounds, scheduler.config())?;

    let (mut tx, rx) = mpsc::unbounded_channel();
    let span = tracing::info_span!("debate", rounds);
    let result = tokio::spawn(
        async move { scheduler.run(&topic, rounds, &mut tx).await }.instrument(span),
    );

    Ok(DebateStream {
        messages: rx,
        result,
    })
}
