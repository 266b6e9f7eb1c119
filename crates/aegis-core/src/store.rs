//! Record store trait.
//!
//! Defines the interface for the external persistence collaborator. The
//! store is a fire-and-forget mirror: the application writes rows into named
//! collections and never reads them back.

use crate::error::Result;
use async_trait::async_trait;

/// Collection names used by the application.
pub mod collections {
    /// One row per scan finding.
    pub const SCAN_RESULTS: &str = "scan_results";
    /// One row per completed assistant exchange.
    pub const CHAT_HISTORY: &str = "chat_history";
}

/// An abstract store for persisting application records.
///
/// Implementations decide the actual storage mechanism (hosted backend,
/// in-memory development store, test double). No read path is required.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a single record into the named collection.
    ///
    /// # Errors
    ///
    /// Returns `AegisError::Store` when the record could not be persisted.
    async fn insert(&self, collection: &str, record: serde_json::Value) -> Result<()>;
}
