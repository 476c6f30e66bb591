use std::sync::Arc;

use super::action::{HomeAction, HomeMutation};
use super::state::HomeState;
use crate::api::ApiError;
use crate::domain::{SortOption, TipRepository};
use crate::storage::BlockList;
use crate::ui::mvi::{Mutations, Reactor, Reducer};

pub const FETCH_FAILED_TOAST: &str = "Couldn't load tips. Please try again later.";

pub struct HomeReactor {
    tips: Arc<dyn TipRepository>,
    block_list: Arc<BlockList>,
}

impl HomeReactor {
    pub fn new(tips: Arc<dyn TipRepository>, block_list: Arc<BlockList>) -> Self {
        Self { tips, block_list }
    }

    fn load(&self, sort: SortOption) -> Mutations<HomeMutation> {
        let tips = Arc::clone(&self.tips);
        let block_list = Arc::clone(&self.block_list);

        Mutations::concat([
            Mutations::just(HomeMutation::SetLoading(true)),
            Mutations::try_task(
                async move {
                    let fetched = tips.fetch_tips(sort).await?;
                    let visible = sort.sorted(block_list.filter_tips(fetched));
                    Ok::<_, ApiError>(Mutations::just(HomeMutation::SetTips(visible)))
                },
                |err: ApiError| {
                    tracing::warn!(error = %err, kind = err.error_type(), "Failed to fetch feed");
                    Mutations::just(HomeMutation::SetToast(FETCH_FAILED_TOAST.to_string()))
                },
            ),
            Mutations::just(HomeMutation::SetLoading(false)),
        ])
    }
}

impl Reducer for HomeReactor {
    type State = HomeState;
    type Mutation = HomeMutation;

    fn reduce(mut state: HomeState, mutation: HomeMutation) -> HomeState {
        match mutation {
            HomeMutation::SetLoading(loading) => state.is_loading = loading,
            HomeMutation::SetTips(tips) => state.tips = tips,
            HomeMutation::SetSortOption(option) => state.sort_option = option,
            HomeMutation::SetSelectedTip(tip) => state.selected_tip = Some(tip),
            HomeMutation::SetPushSignal => state.push_signal.set(()),
            HomeMutation::SetToast(message) => state.toast.set(message),
        }
        state
    }
}

impl Reactor for HomeReactor {
    type Action = HomeAction;

    fn initial_state(&self) -> HomeState {
        HomeState::default()
    }

    fn mutate(&self, action: HomeAction, state: &HomeState) -> Mutations<HomeMutation> {
        match action {
            HomeAction::ViewDidLoad => self.load(state.sort_option),
            HomeAction::Refresh if state.is_loading => Mutations::empty(),
            HomeAction::Refresh => self.load(state.sort_option),
            HomeAction::SortButtonTapped(option) => Mutations::sequence([
                HomeMutation::SetTips(option.sorted(state.tips.clone())),
                HomeMutation::SetSortOption(option),
            ]),
            HomeAction::TipSelected(tip) => Mutations::sequence([
                HomeMutation::SetSelectedTip(tip),
                HomeMutation::SetPushSignal,
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::StreamExt;

    use super::*;
    use crate::ui::fakes::{block_list, tip, FakeTipRepository};
    use crate::ui::mvi::{PulseReader, Store};

    fn fold(mutations: Vec<HomeMutation>) -> HomeState {
        mutations
            .into_iter()
            .fold(HomeState::default(), HomeReactor::reduce)
    }

    #[tokio::test]
    async fn load_filters_blocked_writers_between_loading_flags() {
        let repo = Arc::new(FakeTipRepository::with_tips(vec![
            tip(1, 10, "kim"),
            tip(2, 20, "lee"),
            tip(3, 10, "kim"),
        ]));
        let blocks = block_list();
        blocks.block(20).unwrap();
        let reactor = HomeReactor::new(repo.clone(), blocks);

        let mutations = reactor
            .mutate(HomeAction::ViewDidLoad, &HomeState::default())
            .collect()
            .await;

        assert!(matches!(mutations[0], HomeMutation::SetLoading(true)));
        assert!(matches!(mutations[2], HomeMutation::SetLoading(false)));
        let state = fold(mutations);
        let ids: Vec<i64> = state.tips.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(!state.is_loading);
        assert_eq!(repo.requests.lock().as_slice(), ["feed:latest"]);
    }

    #[tokio::test]
    async fn fetch_failure_becomes_toast() {
        let reactor = HomeReactor::new(Arc::new(FakeTipRepository::failing()), block_list());
        let state = fold(
            reactor
                .mutate(HomeAction::ViewDidLoad, &HomeState::default())
                .collect()
                .await,
        );
        assert!(state.tips.is_empty());
        assert_eq!(
            PulseReader::new().read(&state.toast),
            Some(FETCH_FAILED_TOAST.to_string())
        );
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let reactor = HomeReactor::new(Arc::new(FakeTipRepository::default()), block_list());
        let loading = HomeState {
            is_loading: true,
            ..HomeState::default()
        };
        assert!(reactor
            .mutate(HomeAction::Refresh, &loading)
            .into_immediate()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn sort_reorders_loaded_tips_locally() {
        let reactor = HomeReactor::new(Arc::new(FakeTipRepository::default()), block_list());
        let state = HomeState {
            tips: vec![tip(1, 1, "a"), tip(2, 2, "b"), tip(3, 3, "c")],
            ..HomeState::default()
        };
        let mutations = reactor
            .mutate(HomeAction::SortButtonTapped(SortOption::Views), &state)
            .into_immediate()
            .unwrap();
        let next = mutations.into_iter().fold(state, HomeReactor::reduce);
        let ids: Vec<i64> = next.tips.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(next.sort_option, SortOption::Views);
    }

    #[tokio::test]
    async fn selecting_a_tip_pushes_once() {
        let reactor = HomeReactor::new(Arc::new(FakeTipRepository::default()), block_list());
        let store = Store::new(reactor);
        let mut pushes = store.pulse(|s: &HomeState| &s.push_signal);

        store.dispatch(HomeAction::TipSelected(tip(7, 1, "a")));

        let pushed = tokio::time::timeout(Duration::from_secs(1), pushes.next()).await;
        assert_eq!(pushed.ok().flatten(), Some(()));
        assert_eq!(store.current_state().selected_tip.map(|t| t.id), Some(7));
    }
}
