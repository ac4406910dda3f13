//! One activation of the story list
//!
//! A [`Session`] owns the three pieces of state that live for one activation:
//! the [`StoryStore`], the persisted [`SearchTerm`] and at most one
//! [`PendingFetch`]. Input events (term edits, removals) and the fetch
//! settlement are all applied from the caller's thread, one at a time.

use tokio::runtime::Handle;

use crate::fetch::{FetchConfig, FetchOutcome, PendingFetch, SimulatedSource};
use crate::filters::filter_stories;
use crate::models::Story;
use crate::storage::{KeyValueStore, SearchTerm};
use crate::store::{StoriesAction, StoriesState, StoryStatus, StoryStore};

/// Maximum search term length accepted from keyboard input
pub const MAX_TERM_LEN: usize = 256;

pub struct Session<S: KeyValueStore> {
    store: StoryStore,
    term: SearchTerm<S>,
    fetch_config: FetchConfig,
    pending: Option<PendingFetch>,
    activated: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Create an inactive session; the search term is read from `storage` now
    pub fn new(storage: S, fetch_config: FetchConfig) -> Self {
        Self {
            store: StoryStore::new(),
            term: SearchTerm::load_default(storage),
            fetch_config,
            pending: None,
            activated: false,
        }
    }

    /// Raise the loading flag and issue the fetch
    ///
    /// Only the first call has any effect: the fetch runs once per activation
    /// and is never retried.
    pub fn activate(&mut self, handle: &Handle) {
        if self.activated {
            tracing::warn!("session already activated, ignoring");
            return;
        }
        self.activated = true;

        self.store.dispatch(StoriesAction::FetchInit);
        self.pending = Some(PendingFetch::spawn(handle, SimulatedSource::new(self.fetch_config)));
    }

    /// Apply the fetch result if it has arrived; returns true when it did
    pub fn poll_fetch(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        match pending.try_settle() {
            Some(outcome) => {
                self.pending = None;
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Wait for the in-flight fetch (if any) and apply its result
    pub async fn wait_for_fetch(&mut self) {
        if let Some(pending) = self.pending.take() {
            let outcome = pending.settle().await;
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(stories) => self.store.dispatch(StoriesAction::FetchSuccess(stories)),
            Err(_) => self.store.dispatch(StoriesAction::FetchFailure),
        }
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> &StoriesState {
        self.store.state()
    }

    pub fn status(&self) -> StoryStatus {
        self.store.status()
    }

    pub fn search_term(&self) -> &str {
        self.term.value()
    }

    pub fn storage(&self) -> &S {
        self.term.store()
    }

    /// Stories matching the current term, in collection order
    pub fn visible_stories(&self) -> Vec<&Story> {
        filter_stories(&self.store.state().data, self.term.value())
    }

    pub fn remove_story(&mut self, object_id: u64) {
        self.store.dispatch(StoriesAction::RemoveStory(object_id));
    }

    /// Replace the search term; persistence failures are logged, not returned
    pub fn set_search_term(&mut self, value: impl Into<String>) {
        let result = self.term.set(value);
        self.log_persist_error(result);
    }

    /// Append one character; returns false when the term is already at the cap
    pub fn push_char(&mut self, c: char) -> bool {
        if self.term.value().chars().count() >= MAX_TERM_LEN {
            return false;
        }
        let result = self.term.update(|value| value.push(c));
        self.log_persist_error(result);
        true
    }

    /// Drop the last character; returns false when the term was empty
    pub fn pop_char(&mut self) -> bool {
        if self.term.value().is_empty() {
            return false;
        }
        let result = self.term.update(|value| {
            value.pop();
        });
        self.log_persist_error(result);
        true
    }

    pub fn clear_search_term(&mut self) {
        self.set_search_term(String::new());
    }

    fn log_persist_error(&self, result: anyhow::Result<()>) {
        if let Err(e) = result {
            tracing::warn!(key = self.term.key(), error = %e, "failed to persist search term");
        }
    }
}
