//! Deferred story fetch
//!
//! The data source is a stand-in for a real backend: it waits a fixed delay on
//! the tokio timer and then resolves with [`crate::models::initial_stories`], or
//! rejects when failure injection is on. The result travels back over a
//! one-shot channel (one producer, one consumer), so the caller never blocks:
//! the TUI polls [`PendingFetch::try_settle`] on each tick, headless commands
//! await [`PendingFetch::settle`].

pub mod pending;
pub mod source;

pub use pending::{FetchOutcome, PendingFetch};
pub use source::{DEFAULT_FETCH_DELAY, FetchConfig, FetchError, SimulatedSource};
