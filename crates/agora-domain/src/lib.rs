//! # Agora Domain Layer
//!
//! The heart of Agora - three fixed personas arguing over a topic,
//! expressed as pure business logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Agents, personas, documents, messages         ││
//! │  │  repository/- Document store ports (not implementations)    ││
//! │  │  service/   - Context, synthesis, summary, randomness port  ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pacing (the simulated "thinking" delays) lives in `agora-usecase`;
//! storage formats and the real random number generator live in
//! `agora-adapter`.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    agent::{Agent, UnknownAgentError},
    document::{DocumentDraft, DocumentError, DocumentId, KnowledgeDocument},
    message::{DebateMessage, DebateResult},
    persona::{Persona, PersonaRegistry},
    transcript::Transcript,
};

pub use repository::document_repository::{DocumentRepository, DocumentSource, RepositoryError};

pub use service::{
    context::{ContextProvider, ContextSnippet, SnippetSource},
    random::RandomSource,
    summary::SummaryComposer,
    synthesizer::MessageSynthesizer,
};
