use crate::domain::{SortOption, Tip};
use crate::ui::mvi::Action;

#[derive(Debug, Clone)]
pub enum HomeAction {
    ViewDidLoad,
    /// Pull to refresh. Ignored while a load is in flight.
    Refresh,
    SortButtonTapped(SortOption),
    TipSelected(Tip),
}

impl Action for HomeAction {}

#[derive(Debug, Clone)]
pub enum HomeMutation {
    SetLoading(bool),
    SetTips(Vec<Tip>),
    SetSortOption(SortOption),
    SetSelectedTip(Tip),
    SetPushSignal,
    SetToast(String),
}
