//! CLI Commands

pub mod debate;
pub mod docs;
pub mod personas;

pub use debate::DebateCommand;
pub use docs::DocsCommand;
pub use personas::PersonasCommand;
