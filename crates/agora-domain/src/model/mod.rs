//! Domain Models - The vocabulary of Agora
//!
//! Every name here should match how we talk about a debate:
//! agents take turns, rounds complete, a summary closes the exchange.

pub mod agent;
pub mod document;
pub mod message;
pub mod persona;
pub mod transcript;
