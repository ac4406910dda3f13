//! File-backed key-value store: load once, save atomically on every write

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kv::KeyValueStore;

pub const STORAGE_FILENAME: &str = "storage.json";

/// Document schema version; a mismatch discards the stored entries
pub const STORAGE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageDocument {
    version: u32,
    entries: BTreeMap<String, StoredValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredValue {
    value: String,
    updated_at: DateTime<Utc>,
}

impl Default for StorageDocument {
    fn default() -> Self {
        Self { version: STORAGE_VERSION, entries: BTreeMap::new() }
    }
}

/// Key-value store persisted as `storage.json` inside a data directory
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: StorageDocument,
}

impl JsonFileStore {
    /// Open (or lazily create) the store under `data_dir`
    ///
    /// A missing file yields an empty store. A file that cannot be read, is
    /// corrupted, or was written with another schema version is ignored with a
    /// warning and overwritten on the next `set`. Only a data directory that
    /// cannot be created is an error.
    pub fn open(data_dir: &Path) -> Result<Self> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).with_context(|| {
                format!("Failed to create data directory: {}", data_dir.display())
            })?;
        }

        let path = data_dir.join(STORAGE_FILENAME);
        let document = load_document(&path);

        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(&self.document)
            .context("Failed to serialize storage document")?;
        fs::write(&temp_path, json).context("Failed to write storage temp file")?;
        fs::rename(&temp_path, &self.path).context("Failed to rename storage temp file")?;
        Ok(())
    }
}

fn load_document(path: &Path) -> StorageDocument {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return StorageDocument::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read storage file, starting empty");
            return StorageDocument::default();
        }
    };

    let document: StorageDocument = match serde_json::from_str(&json) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable storage file");
            return StorageDocument::default();
        }
    };

    if document.version != STORAGE_VERSION {
        tracing::warn!(
            expected = STORAGE_VERSION,
            found = document.version,
            "storage version mismatch, starting empty"
        );
        return StorageDocument::default();
    }

    document
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.document.entries.get(key).map(|stored| stored.value.clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.document
            .entries
            .insert(key.to_string(), StoredValue { value: value.to_string(), updated_at: Utc::now() });
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.document.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
