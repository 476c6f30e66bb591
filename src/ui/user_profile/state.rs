use crate::domain::{SortOption, Tip, UserProfile};
use crate::ui::mvi::{Pulse, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserProfileState {
    /// `None` until the first successful fetch.
    pub user_profile: Option<UserProfile>,
    pub tips: Vec<Tip>,
    pub sort_option: SortOption,
    pub is_loading: bool,
    pub selected_tip: Option<Tip>,
    pub push_signal: Pulse<()>,
    pub ellipsis_signal: Pulse<()>,
    pub toast: Pulse<String>,
}

impl UiState for UserProfileState {}
