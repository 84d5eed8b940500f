//! In-Memory Repository Implementation
//!
//! Simple in-memory knowledge base. Useful for testing and development.
//! Clones share the same collection, so a clone handed to a running
//! debate sees documents added through another clone.

use std::sync::{Arc, RwLock};

use agora_domain::{
    DocumentDraft, DocumentId, DocumentRepository, DocumentSource, KnowledgeDocument,
    RepositoryError,
};

use super::record::stamp;

/// In-memory knowledge base
///
/// Thread-safe implementation using RwLock. `None` models a store in
/// which no collection has been configured yet.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentRepository {
    documents: Arc<RwLock<Option<Vec<KnowledgeDocument>>>>,
}

impl InMemoryDocumentRepository {
    /// A store with no collection configured
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `documents`
    pub fn with_documents(documents: Vec<KnowledgeDocument>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(Some(documents))),
        }
    }
}

impl DocumentSource for InMemoryDocumentRepository {
    fn list(&self) -> Result<Option<Vec<KnowledgeDocument>>, RepositoryError> {
        let documents = self.documents.read().map_err(|_| {
            RepositoryError::Unavailable {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(documents.clone())
    }
}

impl DocumentRepository for InMemoryDocumentRepository {
    fn add(&mut self, draft: DocumentDraft) -> Result<KnowledgeDocument, RepositoryError> {
        let mut documents = self.documents.write().map_err(|_| {
            RepositoryError::Unavailable {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        let documents = documents.get_or_insert_with(Vec::new);
        let doc = stamp(draft, documents.as_slice());
        documents.push(doc.clone());
        Ok(doc)
    }

    fn delete(&mut self, id: &DocumentId) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().map_err(|_| {
            RepositoryError::Unavailable {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        let documents = documents.get_or_insert_with(Vec::new);
        let before = documents.len();
        documents.retain(|doc| doc.id() != id);
        if documents.len() == before {
            return Err(RepositoryError::NotFound {
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
