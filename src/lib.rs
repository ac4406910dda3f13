//! Story Search - filter, prune and remember a small list of stories
//!
//! The library models one screen of a story browser without its rendering:
//!
//! - A loading/error/data state machine driven by a pure reducer ([`store`])
//! - A case-insensitive title filter over the loaded stories ([`filters`])
//! - A search term persisted to a key-value slot between runs ([`storage`])
//! - A fixed-delay simulated fetch delivered over a one-shot channel ([`fetch`])
//! - A [`Session`] that wires these together for one activation
//!
//! The `story-search` binary adds a terminal UI (`tui`) and a small CLI ([`cli`]).
//!
//! # Example
//!
//! ```no_run
//! use story_search::fetch::FetchConfig;
//! use story_search::storage::MemoryStore;
//! use story_search::Session;
//!
//! # async fn demo() {
//! let mut session = Session::new(MemoryStore::new(), FetchConfig::default());
//! session.activate(&tokio::runtime::Handle::current());
//! session.wait_for_fetch().await;
//!
//! session.set_search_term("red");
//! for story in session.visible_stories() {
//!     println!("{}", story.title);
//! }
//! # }
//! ```

pub mod cli;
pub mod fetch;
pub mod filters;
pub mod models;
pub mod session;
pub mod storage;
pub mod store;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use filters::filter_stories;
pub use models::{Story, initial_stories};
pub use session::Session;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, SearchTerm};
pub use store::{StoriesAction, StoriesState, StoryStatus, StoryStore, remove_story, stories_reducer};
