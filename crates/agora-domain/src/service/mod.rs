//! Domain Services - The verbs of a debate turn
//!
//! Each turn asks the ContextProvider for a snippet and the
//! MessageSynthesizer for text; after the last turn the SummaryComposer
//! closes the exchange. Sequencing and pacing live in `agora-usecase`.

pub mod context;
pub mod random;
pub mod summary;
pub mod synthesizer;
