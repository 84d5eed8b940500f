//! # Agora Use Case Layer
//!
//! Application-specific business rules.
//! This layer drives a debate: it walks rounds × agents, paces every
//! turn with a simulated thinking delay, and pushes each message to the
//! caller as soon as it exists.
//!
//! ```text
//! start_debate ──► DebateScheduler::run
//!                    │  for round in 1..=R
//!                    │    for agent in [Engineer, Visionary, Ethicist]
//!                    │      sleep(thinking) → retrieve → render → sink
//!                    │  sleep(settle) → compose
//!                    ▼
//!                DebateResult
//! ```

pub use agora_domain;

pub mod config;
pub mod error;
pub mod scheduler;
pub mod sink;
pub mod stream;

pub use config::DebateConfig;
pub use error::{DebateError, ValidationError};
pub use scheduler::{DebateScheduler, DebateState};
pub use sink::{CallbackSink, MessageSink, SinkClosed};
pub use stream::{start_debate, DebateStream};
