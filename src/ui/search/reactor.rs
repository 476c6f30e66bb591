use std::sync::Arc;

use super::action::{SearchAction, SearchMutation};
use super::state::SearchState;
use crate::api::ApiError;
use crate::domain::TipRepository;
use crate::storage::{BlockList, RecentKeywords, StorageError};
use crate::ui::mvi::{Mutations, Reactor, Reducer};

pub const EMPTY_KEYWORD_TOAST: &str = "Please enter a search term.";
pub const SEARCH_FAILED_TOAST: &str = "Search failed. Please try again later.";

pub struct SearchReactor {
    tips: Arc<dyn TipRepository>,
    block_list: Arc<BlockList>,
    recent_keywords: RecentKeywords,
}

impl SearchReactor {
    pub fn new(
        tips: Arc<dyn TipRepository>,
        block_list: Arc<BlockList>,
        recent_keywords: RecentKeywords,
    ) -> Self {
        Self {
            tips,
            block_list,
            recent_keywords,
        }
    }

    fn search(&self, state: &SearchState) -> Mutations<SearchMutation> {
        let keyword = state.keyword.trim().to_string();
        if keyword.is_empty() {
            return Mutations::just(SearchMutation::SetToast(EMPTY_KEYWORD_TOAST.to_string()));
        }

        // History write failures are logged; the search still runs.
        let recent = match self.recent_keywords.record(&keyword) {
            Ok(keywords) => Mutations::just(SearchMutation::SetRecentKeywords(keywords)),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to record search keyword");
                Mutations::empty()
            }
        };

        let sort = state.sort_option;
        let tips = Arc::clone(&self.tips);
        let block_list = Arc::clone(&self.block_list);
        let fetch = Mutations::try_task(
            async move {
                let found = tips.search_tips(&keyword, sort).await?;
                let visible = sort.sorted(block_list.filter_tips(found));
                Ok::<_, ApiError>(Mutations::sequence([
                    SearchMutation::SetTips(visible),
                    SearchMutation::SetSearched,
                ]))
            },
            |err: ApiError| {
                tracing::warn!(error = %err, "Search request failed");
                Mutations::just(SearchMutation::SetToast(SEARCH_FAILED_TOAST.to_string()))
            },
        );

        Mutations::concat([
            recent,
            Mutations::just(SearchMutation::SetSearching(true)),
            fetch,
            Mutations::just(SearchMutation::SetSearching(false)),
        ])
    }

    fn update_recent<F>(&self, update: F) -> Mutations<SearchMutation>
    where
        F: FnOnce(&RecentKeywords) -> Result<Vec<String>, StorageError>,
    {
        match update(&self.recent_keywords) {
            Ok(keywords) => Mutations::just(SearchMutation::SetRecentKeywords(keywords)),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to update recent keywords");
                Mutations::empty()
            }
        }
    }
}

impl Reducer for SearchReactor {
    type State = SearchState;
    type Mutation = SearchMutation;

    fn reduce(mut state: SearchState, mutation: SearchMutation) -> SearchState {
        match mutation {
            SearchMutation::SetKeyword(keyword) => state.keyword = keyword,
            SearchMutation::SetRecentKeywords(keywords) => state.recent_keywords = keywords,
            SearchMutation::SetSearching(searching) => state.is_searching = searching,
            SearchMutation::SetTips(tips) => state.tips = tips,
            SearchMutation::SetSearched => state.has_searched = true,
            SearchMutation::SetSortOption(option) => state.sort_option = option,
            SearchMutation::SetSelectedTip(tip) => state.selected_tip = Some(tip),
            SearchMutation::SetPushSignal => state.push_signal.set(()),
            SearchMutation::SetDismissSignal => state.dismiss_signal.set(()),
            SearchMutation::SetToast(message) => state.toast.set(message),
        }
        state
    }
}

impl Reactor for SearchReactor {
    type Action = SearchAction;

    fn initial_state(&self) -> SearchState {
        SearchState::default()
    }

    fn mutate(&self, action: SearchAction, state: &SearchState) -> Mutations<SearchMutation> {
        match action {
            SearchAction::KeywordInputChanged(keyword) => {
                Mutations::just(SearchMutation::SetKeyword(keyword))
            }
            SearchAction::SearchButtonTapped => self.search(state),
            SearchAction::LoadRecentKeywords => Mutations::just(
                SearchMutation::SetRecentKeywords(self.recent_keywords.load()),
            ),
            SearchAction::RemoveRecentKeyword(keyword) => {
                self.update_recent(|recent| recent.remove(&keyword))
            }
            SearchAction::RemoveAllButtonTapped => {
                self.update_recent(|recent| recent.clear().map(|()| Vec::new()))
            }
            SearchAction::TipSelected(tip) => Mutations::sequence([
                SearchMutation::SetSelectedTip(tip),
                SearchMutation::SetPushSignal,
            ]),
            SearchAction::SortButtonTapped(option) => Mutations::sequence([
                SearchMutation::SetTips(option.sorted(state.tips.clone())),
                SearchMutation::SetSortOption(option),
            ]),
            SearchAction::BackButtonTapped => Mutations::just(SearchMutation::SetDismissSignal),
        }
    }
}
