use crate::models::Story;

/// Return the stories whose title contains `term`, ignoring case
///
/// Filter logic:
/// - Both sides are lower-cased before matching
/// - Relative order of the input is preserved
/// - An empty term matches every story
pub fn filter_stories<'a>(stories: &'a [Story], term: &str) -> Vec<&'a Story> {
    if term.is_empty() {
        return stories.iter().collect();
    }

    let lower_term = term.to_lowercase();
    stories.iter().filter(|story| title_contains(story, &lower_term)).collect()
}

fn title_contains(story: &Story, lower_term: &str) -> bool {
    story.title.to_lowercase().contains(lower_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::initial_stories;

    fn create_test_story(title: &str, object_id: u64) -> Story {
        Story::new(title, "https://example.com", "author", 1, 1, object_id)
    }

    fn titles<'a>(stories: &[&'a Story]) -> Vec<&'a str> {
        stories.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let stories = initial_stories();
        let result = filter_stories(&stories, "");
        assert_eq!(result.len(), stories.len());
        assert_eq!(titles(&result), vec!["React", "Redux"]);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let stories = initial_stories();
        assert_eq!(titles(&filter_stories(&stories, "re")), vec!["React", "Redux"]);
        assert_eq!(titles(&filter_stories(&stories, "RE")), vec!["React", "Redux"]);
        assert_eq!(titles(&filter_stories(&stories, "Red")), vec!["Redux"]);
        assert_eq!(titles(&filter_stories(&stories, "ACT")), vec!["React"]);
    }

    #[test]
    fn test_filter_no_match() {
        let stories = initial_stories();
        assert!(filter_stories(&stories, "vue").is_empty());
    }

    #[test]
    fn test_filter_empty_collection() {
        assert!(filter_stories(&[], "anything").is_empty());
        assert!(filter_stories(&[], "").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let stories = vec![
            create_test_story("Zeta rust", 0),
            create_test_story("alpha", 1),
            create_test_story("Rust book", 2),
            create_test_story("trusty", 3),
        ];
        assert_eq!(titles(&filter_stories(&stories, "rust")), vec!["Zeta rust", "Rust book", "trusty"]);
    }

    #[test]
    fn test_filter_matches_only_title() {
        let mut story = create_test_story("Plain", 0);
        story.author = "Redux Author".to_string();
        story.url = "https://redux.js.org/".to_string();
        assert!(filter_stories(std::slice::from_ref(&story), "redux").is_empty());
    }

    #[test]
    fn test_filter_unicode_case() {
        let stories = vec![create_test_story("Ärger mit Élan", 0)];
        assert_eq!(filter_stories(&stories, "äRGER").len(), 1);
        assert_eq!(filter_stories(&stories, "élan").len(), 1);
    }
}
