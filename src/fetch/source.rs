use std::time::Duration;

use thiserror::Error;
use tokio::time;

use crate::models::{Story, initial_stories};

/// Delay before the simulated fetch settles
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(3000);

/// The only way a fetch can fail; carries no payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("failed to fetch stories")]
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    pub delay: Duration,
    /// Reject instead of resolving
    pub fail: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { delay: DEFAULT_FETCH_DELAY, fail: false }
    }
}

impl FetchConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

/// Timer-based data source
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSource {
    config: FetchConfig,
}

impl SimulatedSource {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Wait for the configured delay, then resolve with the seed snapshot
    #[tracing::instrument(skip(self), fields(delay_ms = self.config.delay.as_millis() as u64, fail = self.config.fail))]
    pub async fn fetch(self) -> Result<Vec<Story>, FetchError> {
        time::sleep(self.config.delay).await;

        if self.config.fail {
            return Err(FetchError::Rejected);
        }

        let stories = initial_stories();
        tracing::info!(count = stories.len(), "simulated fetch resolved");
        Ok(stories)
    }
}
