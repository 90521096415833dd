//! Jittered pause between requests

use crate::config::CrawlerConfig;
use std::time::Duration;

/// Uniformly jittered politeness delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Politeness {
    min_ms: u64,
    max_ms: u64,
}

impl Politeness {
    /// Creates a delay sampled from `[min_ms, max_ms]`; swapped bounds are reordered
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self::new(config.delay_min_ms, config.delay_max_ms)
    }

    /// Picks the next pause length
    pub fn sample(&self) -> Duration {
        Duration::from_millis(fastrand::u64(self.min_ms..=self.max_ms))
    }

    /// Sleeps for a freshly sampled pause
    pub async fn pause(&self) {
        let delay = self.sample();
        tracing::trace!("Politeness pause: {:?}", delay);
        tokio::time::sleep(delay).await;
    }
}
