use anyhow::Result;

use super::kv::KeyValueStore;

/// Slot the search term is remembered under
pub const SEARCH_TERM_KEY: &str = "searchItem";
/// Term used when nothing has been stored yet
pub const DEFAULT_SEARCH_TERM: &str = "R";

/// Current search term, mirrored to a key-value slot on every change
#[derive(Debug)]
pub struct SearchTerm<S: KeyValueStore> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> SearchTerm<S> {
    /// Read the stored term or fall back to `default`
    ///
    /// A read error is logged and treated like an empty slot.
    pub fn load(store: S, key: &str, default: &str) -> Self {
        let value = match store.get(key) {
            Ok(Some(stored)) => stored,
            Ok(None) => default.to_string(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read search term, using default");
                default.to_string()
            }
        };

        Self { store, key: key.to_string(), value }
    }

    /// Load using [`SEARCH_TERM_KEY`] and [`DEFAULT_SEARCH_TERM`]
    pub fn load_default(store: S) -> Self {
        Self::load(store, SEARCH_TERM_KEY, DEFAULT_SEARCH_TERM)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the term and write it through to the store
    ///
    /// The in-memory value is updated even if the write fails, so typing never
    /// stalls on a broken store; the error is returned for the caller to report.
    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        self.value = value.into();
        self.persist()
    }

    /// Edit the term in place, then persist it
    pub fn update(&mut self, edit: impl FnOnce(&mut String)) -> Result<()> {
        edit(&mut self.value);
        self.persist()
    }

    /// Forget the stored value; the next activation starts from the default
    pub fn reset(&mut self, default: &str) -> Result<()> {
        self.value = default.to_string();
        self.store.remove(&self.key)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<()> {
        self.store.set(&self.key, &self.value)
    }
}
