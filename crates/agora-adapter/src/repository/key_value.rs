//! Key-Value File Store - A local-storage style JSON file
//!
//! The file holds one JSON object mapping string keys to string values.
//! The knowledge base lives under `knowledgeBase` as a serialized JSON
//! array of document records.
//!
//! ```json
//! { "knowledgeBase": "[{\"id\":\"1717\",\"title\":\"Doc A\",...}]" }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use agora_domain::{
    DocumentDraft, DocumentId, DocumentRepository, DocumentSource, KnowledgeDocument,
    RepositoryError,
};
use tempfile::NamedTempFile;
use tracing::debug;

use super::record::{stamp, DocumentRecord};
use crate::error::StoreError;

/// Key under which the knowledge base is stored
pub const KNOWLEDGE_BASE_KEY: &str = "knowledgeBase";

/// String-to-string store persisted as a JSON object
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one value; a missing file reads as an empty store
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    /// Write one value, creating the file and its parent directory if needed
    pub fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the file atomically: readers see the old or the new
    /// contents, never a truncated file
    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(serde_json::to_string_pretty(entries)?.as_bytes())?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        debug!("Wrote key-value store {}", self.path.display());
        Ok(())
    }
}

/// Knowledge base kept under `knowledgeBase` in a key-value file
///
/// Every call goes back to the file, so edits made by another process
/// between two reads are visible to the second one.
#[derive(Debug, Clone)]
pub struct KeyValueDocumentRepository {
    store: JsonFileStore,
}

impl KeyValueDocumentRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }

    /// Open the store file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileStore::new(path))
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }

    fn save(&self, documents: &[KnowledgeDocument]) -> Result<(), RepositoryError> {
        let records: Vec<DocumentRecord> = documents.iter().map(DocumentRecord::from).collect();
        let serialized = serde_json::to_string(&records).map_err(StoreError::from)?;
        self.store.set(KNOWLEDGE_BASE_KEY, serialized)?;
        Ok(())
    }
}

impl DocumentSource for KeyValueDocumentRepository {
    fn list(&self) -> Result<Option<Vec<KnowledgeDocument>>, RepositoryError> {
        let Some(raw) = self.store.get(KNOWLEDGE_BASE_KEY)? else {
            return Ok(None);
        };
        let records: Vec<DocumentRecord> =
            serde_json::from_str(&raw).map_err(|e| RepositoryError::Malformed {
                message: e.to_string(),
            })?;
        Ok(Some(records.into_iter().map(KnowledgeDocument::from).collect()))
    }
}

impl DocumentRepository for KeyValueDocumentRepository {
    fn add(&mut self, draft: DocumentDraft) -> Result<KnowledgeDocument, RepositoryError> {
        let mut documents = self.list()?.unwrap_or_default();
        let doc = stamp(draft, &documents);
        documents.push(doc.clone());
        self.save(&documents)?;
        Ok(doc)
    }

    fn delete(&mut self, id: &DocumentId) -> Result<(), RepositoryError> {
        let mut documents = self.list()?.unwrap_or_default();
        let before = documents.len();
        documents.retain(|doc| doc.id() != id);
        if documents.len() == before {
            return Err(RepositoryError::NotFound {
                id: id.to_string(),
            });
        }
        self.save(&documents)
    }
}
