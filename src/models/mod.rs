//! Data models for the story list.
//!
//! - [`Story`] - One discoverable entry (title, link, author, counters, stable id)
//! - [`initial_stories`] - The fixed snapshot served by the simulated fetch
//!
//! Stories are immutable once created. Removal produces a new collection
//! rather than editing one in place (see [`crate::store::remove_story`]).

pub mod story;

pub use story::{Story, initial_stories};
