//! Politeness throttling
//!
//! The crawler pauses for a fixed interval after every successful download
//! so the origin server sees at most one article request per interval.

use std::time::Duration;

/// Fixed minimum interval between successful downloads
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// A throttle that never waits
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits out the politeness interval
    pub async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }

        tracing::trace!("Politeness pause of {:?}", self.interval);
        tokio::time::sleep(self.interval).await;
    }
}
