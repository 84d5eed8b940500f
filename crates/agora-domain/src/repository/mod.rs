//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define what the domain needs from the document store,
//! but NOT how it's stored. That's the adapter's job.
//!
//! ```text
//! Domain Layer            │  Adapter Layer
//! ────────────────────────┼──────────────────────────────
//! trait DocumentSource    │  InMemoryDocumentRepository
//!   fn list()             │  KeyValueDocumentRepository
//! trait DocumentRepository│
//!   fn add() / delete()   │
//! ```

pub mod document_repository;
