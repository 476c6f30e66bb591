use crate::domain::{SortOption, Tip};
use crate::ui::mvi::Action;

#[derive(Debug, Clone)]
pub enum SearchAction {
    KeywordInputChanged(String),
    SearchButtonTapped,
    LoadRecentKeywords,
    RemoveRecentKeyword(String),
    RemoveAllButtonTapped,
    TipSelected(Tip),
    SortButtonTapped(SortOption),
    BackButtonTapped,
}

impl Action for SearchAction {}

#[derive(Debug, Clone)]
pub enum SearchMutation {
    SetKeyword(String),
    SetRecentKeywords(Vec<String>),
    SetSearching(bool),
    SetTips(Vec<Tip>),
    SetSearched,
    SetSortOption(SortOption),
    SetSelectedTip(Tip),
    SetPushSignal,
    SetDismissSignal,
    SetToast(String),
}
