//! HTTP AuthGateway implementation for a hosted backend.
//!
//! Signs in through the backend's password-grant endpoint and caches the
//! returned access token for the lifetime of the process.

use aegis_core::auth::{AuthGateway, Session};
use aegis_core::error::{AegisError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

/// Gateway talking to a hosted backend's auth endpoint.
pub struct HttpAuthGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    session: RwLock<Option<Session>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl HttpAuthGateway {
    /// Creates a gateway for the given backend base URL and optional public
    /// API key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            session: RwLock::new(None),
        }
    }

    fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.session.read().await.clone())
    }

    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<Session> {
        let mut request = self.client.post(self.token_url()).json(&serde_json::json!({
            "email": identifier,
            "password": secret,
        }));
        if let Some(api_key) = &self.api_key {
            request = request.header("apikey", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AegisError::auth(format!("sign-in request failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(AegisError::auth(format!(
                "sign-in rejected with status {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AegisError::auth(format!("malformed sign-in response: {}", e)))?;

        let session = Session::new(token.access_token);
        *self.session.write().await = Some(session.clone());
        tracing::debug!("signed in against {}", self.base_url);
        Ok(session)
    }
}
