use crate::domain::{SortOption, Tip, UserProfile};
use crate::ui::mvi::Action;

#[derive(Debug, Clone)]
pub enum UserProfileAction {
    ViewDidLoad,
    SubscribeButtonTapped,
    SortButtonTapped(SortOption),
    ItemSelected(Tip),
    /// Opens the report / block menu.
    ProfileEllipsisButtonTapped,
    ReportUser,
    BlockUser,
}

impl Action for UserProfileAction {}

#[derive(Debug, Clone)]
pub enum UserProfileMutation {
    SetLoading(bool),
    SetUserProfile(UserProfile),
    SetTips(Vec<Tip>),
    SetSortOption(SortOption),
    SetSelectedTip(Tip),
    SetPushSignal,
    SetEllipsisSignal,
    SetToast(String),
}
