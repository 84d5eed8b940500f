//! Transcript export - The downloadable record of a debate
//!
//! The engine exposes topic, messages and summary; the exporter adds the
//! generation timestamp.
//!
//! ```json
//! {
//!   "topic": "Should AI have rights?",
//!   "timestamp": "2025-01-01T12:00:00.000Z",
//!   "messages": [{ "agent": "Engineer", "message": "...", "round": 1 }],
//!   "summary": "After 2 rounds of debate on ..."
//! }
//! ```

use std::path::Path;

use agora_domain::{DebateMessage, Transcript};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One exported message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub agent: String,
    pub message: String,
    pub round: u32,
}

impl From<&DebateMessage> for MessageRecord {
    fn from(message: &DebateMessage) -> Self {
        Self {
            agent: message.agent.display_name().to_string(),
            message: message.message.clone(),
            round: message.round,
        }
    }
}

/// Self-contained transcript document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptExport {
    pub topic: String,
    pub timestamp: String,
    pub messages: Vec<MessageRecord>,
    /// Empty while the debate is still running
    pub summary: String,
}

impl TranscriptExport {
    pub fn from_transcript(transcript: &Transcript, generated_at: DateTime<Utc>) -> Self {
        Self {
            topic: transcript.topic().to_string(),
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            messages: transcript.messages().iter().map(MessageRecord::from).collect(),
            summary: transcript.summary().unwrap_or_default().to_string(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}
