//! Simulated-processing delay trait.

use async_trait::async_trait;
use std::time::Duration;

/// An injectable asynchronous delay.
///
/// The scan and chat operations suspend for a simulated processing interval.
/// Keeping the delay behind a trait lets tests drive the operations
/// deterministically without real elapsed time.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Suspends the current operation for the given interval.
    async fn sleep(&self, duration: Duration);
}
