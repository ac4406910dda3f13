use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use super::source::{FetchError, SimulatedSource};
use crate::models::Story;

pub type FetchOutcome = Result<Vec<Story>, FetchError>;

/// Consumer side of an in-flight fetch
///
/// Holds the receiving half of a one-shot channel. The producer task always
/// runs to completion; if the consumer is gone by then, the result is dropped.
#[derive(Debug)]
pub struct PendingFetch {
    rx: oneshot::Receiver<FetchOutcome>,
}

impl PendingFetch {
    /// Start `source` on `handle` and return the receiving end
    pub fn spawn(handle: &Handle, source: SimulatedSource) -> Self {
        let (tx, rx) = oneshot::channel();

        handle.spawn(async move {
            let outcome = source.fetch().await;
            if tx.send(outcome).is_err() {
                tracing::debug!("fetch settled after its activation ended");
            }
        });

        Self { rx }
    }

    /// Check for a result without blocking
    ///
    /// Returns `Some` exactly once per settled fetch when the caller drops the
    /// handle afterwards. A producer that vanished without sending counts as a
    /// rejection.
    pub fn try_settle(&mut self) -> Option<FetchOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(FetchError::Rejected)),
        }
    }

    /// Wait until the fetch settles
    pub async fn settle(self) -> FetchOutcome {
        self.rx.await.unwrap_or(Err(FetchError::Rejected))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::fetch::FetchConfig;
    use crate::models::initial_stories;

    #[tokio::test(start_paused = true)]
    async fn test_settle_success() {
        let source = SimulatedSource::new(FetchConfig::default());
        let pending = PendingFetch::spawn(&Handle::current(), source);

        assert_eq!(pending.settle().await, Ok(initial_stories()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_failure() {
        let source = SimulatedSource::new(FetchConfig::default().failing());
        let pending = PendingFetch::spawn(&Handle::current(), source);

        assert_eq!(pending.settle().await, Err(FetchError::Rejected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_settle_before_and_after_delay() {
        let config = FetchConfig::default().with_delay(Duration::from_millis(500));
        let mut pending = PendingFetch::spawn(&Handle::current(), SimulatedSource::new(config));

        assert_eq!(pending.try_settle(), None);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(pending.try_settle(), Some(Ok(initial_stories())));
    }
}
