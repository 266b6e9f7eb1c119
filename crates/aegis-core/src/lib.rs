pub mod auth;
pub mod chat;
pub mod config;
pub mod delay;
pub mod error;
pub mod scan;
pub mod store;
pub mod terminal;

// Re-export common error type
pub use error::{AegisError, Result};
