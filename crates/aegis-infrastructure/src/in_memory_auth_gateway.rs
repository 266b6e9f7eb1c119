//! In-memory AuthGateway implementation.
//!
//! Development and offline backend: validates a configured credential pair
//! and issues opaque UUID tokens. No network involved.

use aegis_core::auth::{AuthGateway, Credentials, Session};
use aegis_core::error::{AegisError, Result};
use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

/// A gateway holding sessions in process memory.
///
/// `sign_in` succeeds only for the configured credential pair. The
/// pre-authenticated constructor covers the offline case where no
/// credentials are configured anywhere: the gateway starts with a session
/// already present, so the ensure-session flow finds one instead of
/// failing closed.
pub struct InMemoryAuthGateway {
    /// The only credential pair this gateway accepts.
    credentials: Option<Credentials>,
    session: RwLock<Option<Session>>,
}

impl InMemoryAuthGateway {
    /// Creates a signed-out gateway accepting the given credential pair.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
            session: RwLock::new(None),
        }
    }

    /// Creates a gateway that already holds a session and accepts no
    /// sign-ins.
    pub fn pre_authenticated() -> Self {
        Self {
            credentials: None,
            session: RwLock::new(Some(Session::new(Uuid::new_v4().to_string()))),
        }
    }
}

#[async_trait]
impl AuthGateway for InMemoryAuthGateway {
    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.session.read().unwrap().clone())
    }

    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<Session> {
        let accepted = self
            .credentials
            .as_ref()
            .is_some_and(|c| c.identifier == identifier && c.secret == secret);
        if !accepted {
            return Err(AegisError::auth("invalid identifier or secret"));
        }

        let session = Session::new(Uuid::new_v4().to_string());
        *self.session.write().unwrap() = Some(session.clone());
        tracing::debug!("issued in-memory session for {}", identifier);
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("operator@example.com", "swordfish")
    }

    #[tokio::test]
    async fn test_sign_in_with_matching_credentials() {
        let gateway = InMemoryAuthGateway::new(credentials());
        assert!(gateway.current_session().await.unwrap().is_none());

        let session = gateway
            .sign_in("operator@example.com", "swordfish")
            .await
            .unwrap();
        assert!(!session.access_token().is_empty());

        let cached = gateway.current_session().await.unwrap();
        assert_eq!(cached, Some(session));
    }

    #[tokio::test]
    async fn test_sign_in_rejects_wrong_secret() {
        let gateway = InMemoryAuthGateway::new(credentials());
        let outcome = gateway.sign_in("operator@example.com", "wrong").await;
        assert!(matches!(outcome, Err(AegisError::Auth(_))));
        assert!(gateway.current_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pre_authenticated_starts_with_session() {
        let gateway = InMemoryAuthGateway::pre_authenticated();
        assert!(gateway.current_session().await.unwrap().is_some());

        let outcome = gateway.sign_in("anyone", "anything").await;
        assert!(matches!(outcome, Err(AegisError::Auth(_))));
    }
}
