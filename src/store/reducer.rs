use super::action::StoriesAction;
use super::mutation::remove_story;
use crate::models::Story;

/// Status snapshot: `{data, is_loading, is_error}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Coarse status bucket derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Compute the next state from the current one and a single action
///
/// Pure: `state` is only read, the result is a fresh value.
///
/// | Action           | Effect                                            |
/// |------------------|---------------------------------------------------|
/// | `FetchInit`      | `is_loading = true`, `is_error` unchanged         |
/// | `FetchSuccess`   | `is_loading = false, is_error = false, data = p`  |
/// | `FetchFailure`   | `is_loading = false, is_error = true`, data kept  |
/// | `RemoveStory(id)`| `data` without the first story with that id       |
pub fn stories_reducer(state: &StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState { is_loading: true, ..state.clone() },
        StoriesAction::FetchSuccess(payload) => {
            StoriesState { data: payload, is_loading: false, is_error: false }
        }
        StoriesAction::FetchFailure => {
            StoriesState { is_loading: false, is_error: true, ..state.clone() }
        }
        StoriesAction::RemoveStory(object_id) => {
            StoriesState { data: remove_story(&state.data, object_id), ..state.clone() }
        }
    }
}

/// Owner of the story state for one activation
#[derive(Debug, Default)]
pub struct StoryStore {
    state: StoriesState,
    settled_fetches: usize,
}

impl StoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StoriesState {
        &self.state
    }

    /// Apply `action` and replace the current state with the result
    pub fn dispatch(&mut self, action: StoriesAction) {
        let name = action.name();
        if matches!(action, StoriesAction::FetchSuccess(_) | StoriesAction::FetchFailure) {
            self.settled_fetches += 1;
        }

        let before = self.state.data.len();
        self.state = stories_reducer(&self.state, action);

        tracing::debug!(
            action = name,
            is_loading = self.state.is_loading,
            is_error = self.state.is_error,
            stories_before = before,
            stories_after = self.state.data.len(),
            "dispatched"
        );
    }

    pub fn status(&self) -> StoryStatus {
        if self.state.is_loading {
            StoryStatus::Loading
        } else if self.state.is_error {
            StoryStatus::Failed
        } else if self.settled_fetches == 0 {
            StoryStatus::Idle
        } else {
            StoryStatus::Ready
        }
    }
}
