use crate::domain::{SortOption, Tip};
use crate::ui::mvi::{Pulse, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub tips: Vec<Tip>,
    pub sort_option: SortOption,
    pub is_loading: bool,
    pub selected_tip: Option<Tip>,
    /// Open the detail screen of `selected_tip`.
    pub push_signal: Pulse<()>,
    pub toast: Pulse<String>,
}

impl UiState for HomeState {}
