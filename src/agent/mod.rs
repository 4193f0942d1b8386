//! SDK operations on agent records.
//!
//! Each submodule implements one slice of the [`crate::registry::Registry`]
//! surface: URI hosting, registration, on-chain reads, wallet management,
//! and metadata writes.

pub mod metadata;
pub mod reads;
pub mod register;
pub mod types;
pub mod uri;
pub mod wallet;

pub use types::{Agent, AgentCard, AgentId, Registration};
