//! KnowledgeDocument - Background material the agents may cite
//!
//! Documents are authored outside the engine and stored in an external
//! collection. The engine only ever reads them.

/// Unique identifier for a KnowledgeDocument
///
/// Assigned by the store at creation time (time-based), so uniqueness
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored knowledge document
#[derive(Debug, Clone)]
pub struct KnowledgeDocument {
    id: DocumentId,
    title: String,
    content: String,
    /// RFC 3339 timestamp
    created_at: String,
}

impl KnowledgeDocument {
    /// Rebuild a document as it was stored. No validation happens here:
    /// whatever the store holds is what the engine sees.
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: created_at.into(),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// First `max_chars` characters of the content, never padded
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((byte_index, _)) => &self.content[..byte_index],
            None => &self.content,
        }
    }
}

impl PartialEq for KnowledgeDocument {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same document
        self.id == other.id
    }
}

impl Eq for KnowledgeDocument {}

/// Errors raised while authoring a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    EmptyTitle,
    EmptyContent,
}

impl core::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DocumentError::EmptyTitle => write!(f, "Document title must not be empty"),
            DocumentError::EmptyContent => write!(f, "Document content must not be empty"),
        }
    }
}

impl std::error::Error for DocumentError {}

/// A validated, not-yet-stored document
///
/// The store assigns the id and creation timestamp when it persists
/// the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDraft {
    title: String,
    content: String,
}

impl DocumentDraft {
    /// Trim both fields and reject blanks
    pub fn new(title: &str, content: &str) -> Result<Self, DocumentError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(DocumentError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(DocumentError::EmptyContent);
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Turn the draft into a stored document
    pub fn into_document(self, id: DocumentId, created_at: impl Into<String>) -> KnowledgeDocument {
        KnowledgeDocument::new(id, self.title, self.content, created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> KnowledgeDocument {
        KnowledgeDocument::new(DocumentId::new("1"), "Doc", content, "2025-01-01T00:00:00Z")
    }

    #[test]
    fn test_excerpt_truncates_long_content() {
        let content = "a".repeat(200);
        assert_eq!(doc(&content).excerpt(150).len(), 150);
    }

    #[test]
    fn test_excerpt_keeps_short_content() {
        assert_eq!(doc("short").excerpt(150), "short");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let content = "é".repeat(160);
        let d = doc(&content);
        let excerpt = d.excerpt(150);
        assert_eq!(excerpt.chars().count(), 150);
    }

    #[test]
    fn test_draft_trims_fields() {
        let draft = DocumentDraft::new("  Title ", "\n body \t").unwrap();
        assert_eq!(draft.title(), "Title");
        assert_eq!(draft.content(), "body");
    }

    #[test]
    fn test_draft_rejects_blank_fields() {
        assert_eq!(DocumentDraft::new("  ", "body"), Err(DocumentError::EmptyTitle));
        assert_eq!(DocumentDraft::new("Title", ""), Err(DocumentError::EmptyContent));
    }

    #[test]
    fn test_entity_equality() {
        let a = KnowledgeDocument::new(DocumentId::new("42"), "A", "x", "t");
        let b = KnowledgeDocument::new(DocumentId::new("42"), "B", "y", "t");
        assert_eq!(a, b);
    }
}
