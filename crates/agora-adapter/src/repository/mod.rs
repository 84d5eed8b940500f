//! Persistence Adapters - Knowledge base implementations
//!
//! These implement the document ports from agora-domain.

pub mod in_memory;
pub mod key_value;
pub mod record;
