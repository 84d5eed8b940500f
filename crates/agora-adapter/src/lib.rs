//! # Agora Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Knowledge base implementations (in-memory, key-value file)
//! - `random` - `rand`-backed implementation of the domain's `RandomSource`
//! - `export` - Serializable transcript for download/export

pub mod error;
pub mod export;
pub mod random;
pub mod repository;

pub use error::StoreError;
pub use export::{MessageRecord, TranscriptExport};
pub use random::StdRandom;
pub use repository::in_memory::InMemoryDocumentRepository;
pub use repository::key_value::{JsonFileStore, KeyValueDocumentRepository, KNOWLEDGE_BASE_KEY};
