//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use story_search::Story;
use tempfile::TempDir;

/// Builder for data directories handed to the binary or to `JsonFileStore`
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a raw `storage.json`
    pub fn with_storage(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("storage.json"), content)
            .expect("Failed to write storage.json");
        self
    }

    /// Pre-store a search term in the current document format
    pub fn with_search_term(self, term: &str) -> Self {
        let document = serde_json::json!({
            "version": 1,
            "entries": {
                "searchItem": { "value": term, "updated_at": "2024-01-01T00:00:00Z" }
            }
        });
        self.with_storage(&document.to_string())
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for stories with sensible defaults
pub struct StoryBuilder {
    story: Story,
}

impl StoryBuilder {
    pub fn new(title: &str, object_id: u64) -> Self {
        Self {
            story: Story::new(title, "https://example.com/", "Test Author", 0, 0, object_id),
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.story.url = url.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.story.author = author.to_string();
        self
    }

    pub fn build(self) -> Story {
        self.story
    }
}

/// Stories titled `titles[i]` with ids `0..n`
pub fn stories_with_titles(titles: &[&str]) -> Vec<Story> {
    titles.iter().enumerate().map(|(i, title)| StoryBuilder::new(title, i as u64).build()).collect()
}

/// Read the remembered term straight from `storage.json`
pub fn stored_term(data_dir: &Path) -> Option<String> {
    let json = fs::read_to_string(data_dir.join("storage.json")).ok()?;
    let document: serde_json::Value = serde_json::from_str(&json).ok()?;
    document["entries"]["searchItem"]["value"].as_str().map(str::to_string)
}
