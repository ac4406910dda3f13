use crate::models::Story;

/// Return a new collection without the first story whose id equals `object_id`
///
/// The input slice is never modified, since earlier state snapshots may still
/// reference it. An unknown id is not an error: the result equals the input.
pub fn remove_story(stories: &[Story], object_id: u64) -> Vec<Story> {
    match stories.iter().position(|story| story.object_id == object_id) {
        Some(idx) => {
            let mut remaining = Vec::with_capacity(stories.len() - 1);
            remaining.extend_from_slice(&stories[..idx]);
            remaining.extend_from_slice(&stories[idx + 1..]);
            remaining
        }
        None => stories.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::initial_stories;

    fn story(title: &str, object_id: u64) -> Story {
        Story::new(title, "https://example.com", "someone", 0, 0, object_id)
    }

    #[test]
    fn test_remove_existing_story() {
        let stories = initial_stories();
        let remaining = remove_story(&stories, 0);

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Redux");
        // Original untouched
        assert_eq!(stories.len(), 2);
    }

    #[test]
    fn test_remove_missing_story_is_noop() {
        let stories = initial_stories();
        let remaining = remove_story(&stories, 42);
        assert_eq!(remaining, stories);
    }

    #[test]
    fn test_remove_from_empty() {
        assert!(remove_story(&[], 0).is_empty());
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let stories = vec![story("a", 7), story("b", 1), story("c", 7)];
        let remaining = remove_story(&stories, 7);

        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].title, "b");
        assert_eq!(remaining[1].title, "c");
    }

    #[test]
    fn test_remove_preserves_order() {
        let stories = vec![story("a", 1), story("b", 2), story("c", 3), story("d", 4)];
        let remaining = remove_story(&stories, 2);
        let titles: Vec<&str> = remaining.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }
}
