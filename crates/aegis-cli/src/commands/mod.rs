//! CLI command implementations.

pub mod chat;
pub mod scan;
pub mod terminal;

use aegis_application::SecurityConsole;
use aegis_core::auth::AuthGateway;
use aegis_core::store::RecordStore;
use aegis_infrastructure::{
    ConfigService, HttpAuthGateway, HttpRecordStore, InMemoryAuthGateway, InMemoryRecordStore,
    SecretService, TokioDelay,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builds the security console from configuration.
///
/// With a configured backend the HTTP gateway/store pair is used; otherwise
/// the in-memory pair. In the offline case without configured credentials
/// the gateway starts pre-authenticated, since there is no credential pair
/// it could meaningfully validate.
pub fn build_console() -> Result<SecurityConsole> {
    let config = ConfigService::new(None).load()?;
    let secrets = SecretService::new(None).load()?;

    let (auth, store): (Arc<dyn AuthGateway>, Arc<dyn RecordStore>) = match &config.backend {
        Some(backend) => {
            tracing::debug!("using hosted backend at {}", backend.base_url);
            let auth = Arc::new(HttpAuthGateway::new(
                &backend.base_url,
                backend.api_key.clone(),
            ));
            let store = Arc::new(HttpRecordStore::new(
                &backend.base_url,
                backend.api_key.clone(),
                auth.clone() as Arc<dyn AuthGateway>,
            ));
            (auth, store)
        }
        None => {
            tracing::debug!("no backend configured, using in-memory backend");
            let auth = match &secrets.credentials {
                Some(credentials) => Arc::new(InMemoryAuthGateway::new(credentials.clone())),
                None => Arc::new(InMemoryAuthGateway::pre_authenticated()),
            };
            (auth, Arc::new(InMemoryRecordStore::new()))
        }
    };

    let mut console = SecurityConsole::new(auth, store, Arc::new(TokioDelay)).with_intervals(
        Duration::from_millis(config.scan_interval_ms),
        Duration::from_millis(config.reply_interval_ms),
    );
    if let Some(credentials) = secrets.credentials {
        console = console.with_credentials(credentials);
    }
    Ok(console)
}
