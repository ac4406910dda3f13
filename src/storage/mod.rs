//! Durable key-value slot used to remember the search term across activations
//!
//! The store is injected behind [`KeyValueStore`] so the rest of the crate never
//! touches the filesystem directly:
//! - [`MemoryStore`]: in-process map, for tests and `--ephemeral` runs
//! - [`JsonFileStore`]: single JSON document written atomically (temp file + rename)
//!
//! Default file location: platform-specific data directories
//! - macOS: `~/Library/Application Support/story-search/storage.json`
//! - Linux: `~/.local/share/story-search/storage.json`
//! - Windows: `%APPDATA%\story-search\storage.json`

pub mod file;
pub mod kv;
pub mod term;

pub use file::{JsonFileStore, STORAGE_FILENAME, STORAGE_VERSION};
pub use kv::{KeyValueStore, MemoryStore};
pub use term::{DEFAULT_SEARCH_TERM, SEARCH_TERM_KEY, SearchTerm};
