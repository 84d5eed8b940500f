//! # Agora Application
//!
//! Wires the adapters into the usecase layer and exposes the `agora` CLI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs - Logging, configuration & command dispatch           │
//! │    │                                                            │
//! │    ├── Creates: KeyValueDocumentRepository (adapter)           │
//! │    ├── Creates: StdRandom (adapter)                            │
//! │    ├── Creates: DebateScheduler (usecase)                      │
//! │    └── Renders: streamed messages, summary, tally              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod render;

pub use config::AppConfig;
