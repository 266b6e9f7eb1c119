//! HTTP RecordStore implementation for a hosted backend.
//!
//! Inserts rows through the backend's REST endpoint. Requests carry the
//! public API key and, when a session exists, the session's bearer token.

use aegis_core::auth::AuthGateway;
use aegis_core::error::{AegisError, Result};
use aegis_core::store::RecordStore;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

/// Store inserting rows into a hosted backend's collections.
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    /// Consulted for the bearer token; the gateway owns session state.
    auth: Arc<dyn AuthGateway>,
}

impl HttpRecordStore {
    /// Creates a store for the given backend base URL, optional public API
    /// key, and the auth gateway that holds the session.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        auth: Arc<dyn AuthGateway>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            auth,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn insert(&self, collection: &str, record: serde_json::Value) -> Result<()> {
        let mut request = self.client.post(self.collection_url(collection)).json(&record);
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key);
        }
        if let Some(session) = self.auth.current_session().await? {
            request = request.bearer_auth(session.access_token());
        }

        let response = request
            .send()
            .await
            .map_err(|e| AegisError::store(collection, format!("insert request failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(AegisError::store(
                collection,
                format!("insert rejected with status {}", response.status()),
            ));
        }

        tracing::debug!("inserted row into {}", collection);
        Ok(())
    }
}
