//! In-memory RecordStore implementation.
//!
//! Development and offline backend: rows are kept per collection in process
//! memory and discarded on exit.

use aegis_core::error::Result;
use aegis_core::store::RecordStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// A store keeping inserted rows in a per-collection map.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: Mutex<HashMap<String, Vec<serde_json::Value>>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the rows inserted into a collection, in insertion
    /// order.
    pub fn rows(&self, collection: &str) -> Vec<serde_json::Value> {
        self.records
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns how many rows a collection holds.
    pub fn row_count(&self, collection: &str) -> usize {
        self.records
            .lock()
            .unwrap()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, collection: &str, record: serde_json::Value) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }
}
