use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i64,
    /// Stable identifier, unique within a collection and never reused after removal
    #[serde(rename = "objectID")]
    pub object_id: u64,
}

impl Story {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        author: impl Into<String>,
        num_comments: u32,
        points: i64,
        object_id: u64,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            author: author.into(),
            num_comments,
            points,
            object_id,
        }
    }
}

/// Fixed snapshot resolved by the simulated fetch
pub fn initial_stories() -> Vec<Story> {
    vec![
        Story::new("React", "https://reactjs.org/", "Jordan Walke", 3, 4, 0),
        Story::new("Redux", "https://redux.js.org/", "Dan Abramov, Andrew Clark", 2, 5, 1),
    ]
}
