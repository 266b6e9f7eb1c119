//! Chat domain models.
//!
//! Types for the assistant conversation transcript and the rows persisted
//! to the record store.

pub mod model;

pub use model::{ChatMessage, ChatRecord, MessageRole};
