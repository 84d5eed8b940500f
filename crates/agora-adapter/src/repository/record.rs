//! Stored shape of a knowledge document
//!
//! Field names match what authoring surfaces write:
//! `{id, title, content, createdAt}`.

use agora_domain::{DocumentDraft, DocumentId, KnowledgeDocument};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<DocumentRecord> for KnowledgeDocument {
    fn from(record: DocumentRecord) -> Self {
        KnowledgeDocument::new(
            DocumentId::new(record.id),
            record.title,
            record.content,
            record.created_at,
        )
    }
}

impl From<&KnowledgeDocument> for DocumentRecord {
    fn from(doc: &KnowledgeDocument) -> Self {
        Self {
            id: doc.id().as_str().to_string(),
            title: doc.title().to_string(),
            content: doc.content().to_string(),
            created_at: doc.created_at().to_string(),
        }
    }
}

/// Stamp a draft with a time-based id and the current time
///
/// Ids are milliseconds since the epoch, bumped past any id already in
/// `existing` so two documents added within the same millisecond still
/// get distinct ids.
pub fn stamp(draft: DocumentDraft, existing: &[KnowledgeDocument]) -> KnowledgeDocument {
    let now = Utc::now();
    let mut millis = now.timestamp_millis();
    while existing.iter().any(|doc| doc.id().as_str() == millis.to_string()) {
        millis += 1;
    }

    draft.into_document(
        DocumentId::new(millis.to_string()),
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
