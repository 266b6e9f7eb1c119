//! Tokio-backed Delay implementation.

use aegis_core::delay::Delay;
use async_trait::async_trait;
use std::time::Duration;

/// Delay backed by the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
