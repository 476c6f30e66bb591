use crate::domain::{SortOption, Story, Tip};
use crate::ui::mvi::{Pulse, UiState};

#[derive(Debug, Clone, PartialEq)]
pub struct ExploreState {
    /// Always starts with the "All tips" entry, even without subscriptions.
    pub stories: Vec<Story>,
    pub tips: Vec<Tip>,
    pub sort_option: SortOption,
    pub selected_story: String,
    pub is_loading: bool,
    pub toast: Pulse<String>,
}

impl Default for ExploreState {
    fn default() -> Self {
        Self {
            stories: vec![Story::all_tips()],
            tips: Vec::new(),
            sort_option: SortOption::default(),
            selected_story: Story::ALL_TIPS.to_string(),
            is_loading: false,
            toast: Pulse::new(),
        }
    }
}

impl UiState for ExploreState {}

impl ExploreState {
    /// Tips of the selected writer, or every tip when "All tips" is selected.
    pub fn visible_tips(&self) -> Vec<&Tip> {
        if self.selected_story == Story::ALL_TIPS {
            return self.tips.iter().collect();
        }
        self.tips
            .iter()
            .filter(|tip| tip.writer_name == self.selected_story)
            .collect()
    }
}
