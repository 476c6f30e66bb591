use crate::domain::{SortOption, Tip};
use crate::ui::mvi::{Pulse, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub keyword: String,
    pub recent_keywords: Vec<String>,
    pub tips: Vec<Tip>,
    pub sort_option: SortOption,
    pub is_searching: bool,
    /// True once a search completed; switches the view from recent keywords
    /// to results.
    pub has_searched: bool,
    pub selected_tip: Option<Tip>,
    pub push_signal: Pulse<()>,
    pub dismiss_signal: Pulse<()>,
    pub toast: Pulse<String>,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn shows_empty_result(&self) -> bool {
        self.has_searched && !self.is_searching && self.tips.is_empty()
    }
}
