use crate::domain::{SortOption, Story, Tip};
use crate::ui::mvi::Action;

#[derive(Debug, Clone)]
pub enum ExploreAction {
    ViewDidLoad,
    SortButtonTapped(SortOption),
    /// Story strip entry tapped, identified by its display name.
    StoryCellTapped(String),
}

impl Action for ExploreAction {}

#[derive(Debug, Clone)]
pub enum ExploreMutation {
    SetLoading(bool),
    /// Stories fetched from the server, without the fixed "All tips" entry.
    SetStories(Vec<Story>),
    SetTips(Vec<Tip>),
    SetSortOption(SortOption),
    SetSelectedStory(String),
    SetToast(String),
}
