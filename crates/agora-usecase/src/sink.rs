//! MessageSink - Where each debate message goes the moment it exists
//!
//! The sink only ever receives messages. The final result travels
//! separately, as the return value of the run.

use agora_domain::{DebateMessage, Transcript};
use thiserror::Error;
use tokio::sync::mpsc;

/// The consumer went away; no further messages can be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("message sink closed")]
pub struct SinkClosed;

/// Receives debate messages in emission order
pub trait MessageSink {
    fn deliver(&mut self, message: DebateMessage) -> Result<(), SinkClosed>;
}

impl<K: MessageSink + ?Sized> MessageSink for &mut K {
    fn deliver(&mut self, message: DebateMessage) -> Result<(), SinkClosed> {
        (**self).deliver(message)
    }
}

impl MessageSink for Vec<DebateMessage> {
    fn deliver(&mut self, message: DebateMessage) -> Result<(), SinkClosed> {
        self.push(message);
        Ok(())
    }
}

impl MessageSink for Transcript {
    fn deliver(&mut self, message: DebateMessage) -> Result<(), SinkClosed> {
        self.push(message);
        Ok(())
    }
}

impl MessageSink for mpsc::UnboundedSender<DebateMessage> {
    fn deliver(&mut self, message: DebateMessage) -> Result<(), SinkClosed> {
        self.send(message).map_err(|_| SinkClosed)
    }
}

/// Adapts a plain callback into a sink that never closes
pub struct CallbackSink<F>(pub F);

impl<F: FnMut(DebateMessage)> MessageSink for CallbackSink<F> {
    fn deliver(&mut self, message: DebateMessage) -> Result<(), SinkClosed> {
        (self.0)(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::Agent;

    #[test]
    fn test_callback_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = CallbackSink(|m: DebateMessage| seen.push(m.round));
            sink.deliver(DebateMessage::new(Agent::Engineer, "a", 1)).unwrap();
            sink.deliver(DebateMessage::new(Agent::Visionary, "b", 1)).unwrap();
        }
        assert_eq!(seen, vec![1, 1]);
    }

    #[test]
    fn test_channel_sink_closes_with_receiver() {
        let (mut tx, rx) = mpsc::unbounded_channel();
        tx.deliver(DebateMessage::new(Agent::Engineer, "a", 1)).unwrap();
        drop(rx);
        assert_eq!(
            tx.deliver(DebateMessage::new(Agent::Visionary, "b", 1)),
            Err(SinkClosed)
        );
    }

    #[test]
    fn test_transcript_sink() {
        let mut transcript = Transcript::new("X");
        transcript
            .deliver(DebateMessage::new(Agent::Ethicist, "c", 1))
            .unwrap();
        assert_eq!(transcript.messages().len(), 1);
    }
}
