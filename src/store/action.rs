use crate::models::Story;

/// Events accepted by the story store
///
/// The set is closed: the reducer matches every variant, so there is no
/// fall-through branch that could swallow an unknown event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A fetch was issued; raise the loading flag
    FetchInit,
    /// The fetch resolved with the full collection
    FetchSuccess(Vec<Story>),
    /// The fetch rejected; raise the error flag and keep the last-good data
    FetchFailure,
    /// Drop the story with this `objectID`
    RemoveStory(u64),
}

impl StoriesAction {
    /// Short name used in log output (the payload can be large)
    pub fn name(&self) -> &'static str {
        match self {
            StoriesAction::FetchInit => "STORIES_FETCH_INIT",
            StoriesAction::FetchSuccess(_) => "STORIES_FETCH_SUCCESS",
            StoriesAction::FetchFailure => "STORIES_FETCH_FAILURE",
            StoriesAction::RemoveStory(_) => "REMOVE_STORY",
        }
    }
}
