//! ContextProvider - Simulated retrieval over the knowledge base
//!
//! There is no ranking: each request picks one document uniformly at
//! random and quotes the start of its content. Retrieval is best-effort,
//! so a store that cannot be read degrades to filler text instead of
//! failing the turn.

use crate::model::document::DocumentId;
use crate::repository::document_repository::{DocumentSource, RepositoryError};
use crate::service::random::RandomSource;

/// Filler used when no knowledge base has been configured
pub const NO_COLLECTION_FALLBACK: &str = "Drawing on general principles,";

/// Filler used when the knowledge base is empty or unreadable
pub const EMPTY_COLLECTION_FALLBACK: &str = "Based on fundamental knowledge,";

/// Maximum number of content characters quoted from a document
pub const EXCERPT_CHARS: usize = 150;

/// Where a snippet came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetSource {
    NoCollection,
    EmptyCollection,
    /// The store could not be read; the snippet is the empty-collection filler
    Unreadable(RepositoryError),
    Document(DocumentId),
}

/// Text handed to the synthesizer, plus its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSnippet {
    text: String,
    source: SnippetSource,
}

impl ContextSnippet {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &SnippetSource {
        &self.source
    }
}

impl core::fmt::Display for ContextSnippet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Reads the document store on every request; holds no copy of it
#[derive(Debug, Clone)]
pub struct ContextProvider<S> {
    source: S,
}

impl<S: DocumentSource> ContextProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Produce one context snippet for the current turn
    pub fn retrieve<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ContextSnippet {
        let documents = match self.source.list() {
            Ok(Some(documents)) => documents,
            Ok(None) => {
                return ContextSnippet {
                    text: NO_COLLECTION_FALLBACK.to_string(),
                    source: SnippetSource::NoCollection,
                }
            }
            Err(err) => {
                return ContextSnippet {
                    text: EMPTY_COLLECTION_FALLBACK.to_string(),
                    source: SnippetSource::Unreadable(err),
                }
            }
        };

        if documents.is_empty() {
            return ContextSnippet {
                text: EMPTY_COLLECTION_FALLBACK.to_string(),
                source: SnippetSource::EmptyCollection,
            };
        }

        let chosen = &documents[rng.index(documents.len())];
        ContextSnippet {
            text: format!(
                "According to '{}': \"{}...\"",
                chosen.title(),
                chosen.excerpt(EXCERPT_CHARS)
            ),
            source: SnippetSource::Document(chosen.id().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::KnowledgeDocument;
    use crate::service::random::testing::ScriptedRandom;
    use std::cell::RefCell;

    struct FakeStore {
        result: RefCell<Result<Option<Vec<KnowledgeDocument>>, RepositoryError>>,
    }

    impl FakeStore {
        fn with(result: Result<Option<Vec<KnowledgeDocument>>, RepositoryError>) -> Self {
            Self {
                result: RefCell::new(result),
            }
        }

        fn replace(&self, result: Result<Option<Vec<KnowledgeDocument>>, RepositoryError>) {
            *self.result.borrow_mut() = result;
        }
    }

    impl DocumentSource for FakeStore {
        fn list(&self) -> Result<Option<Vec<KnowledgeDocument>>, RepositoryError> {
            self.result.borrow().clone()
        }
    }

    fn doc(id: &str, title: &str, content: &str) -> KnowledgeDocument {
        KnowledgeDocument::new(DocumentId::new(id), title, content, "2025-01-01T00:00:00Z")
    }

    #[test]
    fn test_absent_collection_uses_general_principles() {
        let provider = ContextProvider::new(FakeStore::with(Ok(None)));
        let snippet = provider.retrieve(&mut ScriptedRandom::default());

        assert_eq!(snippet.text(), NO_COLLECTION_FALLBACK);
        assert_eq!(snippet.source(), &SnippetSource::NoCollection);
    }

    #[test]
    fn test_empty_collection_uses_fundamental_knowledge() {
        let provider = ContextProvider::new(FakeStore::with(Ok(Some(vec![]))));
        let snippet = provider.retrieve(&mut ScriptedRandom::default());

        assert_eq!(snippet.text(), EMPTY_COLLECTION_FALLBACK);
        assert_eq!(snippet.source(), &SnippetSource::EmptyCollection);
    }

    #[test]
    fn test_malformed_store_degrades_to_fallback() {
        let error = RepositoryError::Malformed {
            message: "expected value at line 1".to_string(),
        };
        let provider = ContextProvider::new(FakeStore::with(Err(error.clone())));
        let snippet = provider.retrieve(&mut ScriptedRandom::default());

        assert_eq!(snippet.text(), EMPTY_COLLECTION_FALLBACK);
        assert_eq!(snippet.source(), &SnippetSource::Unreadable(error));
    }

    #[test]
    fn test_short_document_quoted_whole() {
        let provider =
            ContextProvider::new(FakeStore::with(Ok(Some(vec![doc("1", "Doc A", "short")]))));
        let snippet = provider.retrieve(&mut ScriptedRandom::default());

        assert_eq!(snippet.text(), "According to 'Doc A': \"short...\"");
        assert_eq!(snippet.source(), &SnippetSource::Document(DocumentId::new("1")));
    }

    #[test]
    fn test_long_document_truncated_to_150_chars() {
        let content = format!("{}{}", "x".repeat(EXCERPT_CHARS), "TAIL");
        let provider =
            ContextProvider::new(FakeStore::with(Ok(Some(vec![doc("1", "Long", &content)]))));
        let snippet = provider.retrieve(&mut ScriptedRandom::default());

        let expected = format!("According to 'Long': \"{}...\"", "x".repeat(EXCERPT_CHARS));
        assert_eq!(snippet.text(), expected);
        assert!(!snippet.text().contains("TAIL"));
    }

    #[test]
    fn test_random_pick_selects_document() {
        let provider = ContextProvider::new(FakeStore::with(Ok(Some(vec![
            doc("1", "First", "one"),
            doc("2", "Second", "two"),
            doc("3", "Third", "three"),
        ]))));
        let snippet = provider.retrieve(&mut ScriptedRandom::new([2]));

        assert!(snippet.text().contains("Third"));
        assert!(snippet.text().contains("three"));
    }

    #[test]
    fn test_each_call_sees_current_store() {
        let store = FakeStore::with(Ok(None));
        let provider = ContextProvider::new(&store);
        let mut rng = ScriptedRandom::default();
        assert_eq!(provider.retrieve(&mut rng).text(), NO_COLLECTION_FALLBACK);

        store.replace(Ok(Some(vec![doc("9", "Fresh", "added mid-run")])));
        assert!(provider.retrieve(&mut rng).text().contains("Fresh"));
    }
}
