//! Story store: the loading/error/data state machine.
//!
//! All transitions go through [`stories_reducer`], a pure function from the
//! current [`StoriesState`] and one [`StoriesAction`] to the next state.
//! [`StoryStore`] owns the current state for one activation and is the only
//! place that replaces it.
//!
//! ```
//! use story_search::models::initial_stories;
//! use story_search::store::{StoriesAction, StoryStatus, StoryStore};
//!
//! let mut store = StoryStore::new();
//! store.dispatch(StoriesAction::FetchInit);
//! assert_eq!(store.status(), StoryStatus::Loading);
//!
//! store.dispatch(StoriesAction::FetchSuccess(initial_stories()));
//! store.dispatch(StoriesAction::RemoveStory(0));
//! assert_eq!(store.state().data.len(), 1);
//! ```

pub mod action;
pub mod mutation;
pub mod reducer;

pub use action::StoriesAction;
pub use mutation::remove_story;
pub use reducer::{StoriesState, StoryStatus, StoryStore, stories_reducer};
