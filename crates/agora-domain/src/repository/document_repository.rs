//! Document Repository - Abstract access to the knowledge base
//!
//! The engine only needs to read (`DocumentSource`). Authoring surfaces
//! additionally write (`DocumentRepository`).

use crate::model::document::{DocumentDraft, DocumentId, KnowledgeDocument};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Document not found
    NotFound { id: String },
    /// The store exists but its contents cannot be parsed
    Malformed { message: String },
    /// The store could not be reached or written
    Unavailable { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { id } => {
                write!(f, "Document not found: {}", id)
            }
            RepositoryError::Malformed { message } => {
                write!(f, "Malformed document store: {}", message)
            }
            RepositoryError::Unavailable { message } => {
                write!(f, "Document store unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Read side of the knowledge base
///
/// This is a PORT in hexagonal architecture. Every call must observe
/// the store as it is right now: implementations must not hand out a
/// snapshot taken earlier.
pub trait DocumentSource {
    /// All documents in stored order
    ///
    /// `Ok(None)` means no collection has been configured at all,
    /// `Ok(Some(vec![]))` means the collection exists but is empty.
    fn list(&self) -> Result<Option<Vec<KnowledgeDocument>>, RepositoryError>;
}

/// Write side of the knowledge base, used by authoring surfaces only
pub trait DocumentRepository: DocumentSource {
    /// Persist a draft, assigning its id and creation timestamp
    fn add(&mut self, draft: DocumentDraft) -> Result<KnowledgeDocument, RepositoryError>;

    /// Remove a document
    fn delete(&mut self, id: &DocumentId) -> Result<(), RepositoryError>;

    /// Find a document by ID
    fn find_by_id(&self, id: &DocumentId) -> Result<Option<KnowledgeDocument>, RepositoryError> {
        Ok(self
            .list()?
            .unwrap_or_default()
            .into_iter()
            .find(|doc| doc.id() == id))
    }

    /// Count stored documents
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.list()?.map(|docs| docs.len()).unwrap_or(0))
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn list(&self) -> Result<Option<Vec<KnowledgeDocument>>, RepositoryError> {
        (**self).list()
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for std::sync::Arc<T> {
    fn list(&self) -> Result<Option<Vec<KnowledgeDocument>>, RepositoryError> {
        (**self).list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Vec-backed implementation for testing
    struct VecDocumentRepo {
        documents: Option<Vec<KnowledgeDocument>>,
        next_id: u64,
    }

    impl DocumentSource for VecDocumentRepo {
        fn list(&self) -> Result<Option<Vec<KnowledgeDocument>>, RepositoryError> {
            Ok(self.documents.clone())
        }
    }

    impl DocumentRepository for VecDocumentRepo {
        fn add(&mut self, draft: DocumentDraft) -> Result<KnowledgeDocument, RepositoryError> {
            self.next_id += 1;
            let doc = draft.into_document(DocumentId::new(self.next_id.to_string()), "now");
            self.documents.get_or_insert_with(Vec::new).push(doc.clone());
            Ok(doc)
        }

        fn delete(&mut self, id: &DocumentId) -> Result<(), RepositoryError> {
            let docs = self.documents.get_or_insert_with(Vec::new);
            let before = docs.len();
            docs.retain(|d| d.id() != id);
            if docs.len() == before {
                return Err(RepositoryError::NotFound {
                    id: id.to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_default_queries() {
        let mut repo = VecDocumentRepo {
            documents: None,
            next_id: 0,
        };
        assert_eq!(repo.count().unwrap(), 0);

        let doc = repo
            .add(DocumentDraft::new("Doc A", "short").unwrap())
            .unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.find_by_id(doc.id()).unwrap().is_some());

        repo.delete(doc.id()).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(
            repo.delete(doc.id()),
            Err(RepositoryError::NotFound {
                id: doc.id().to_string()
            })
        );
    }
}
