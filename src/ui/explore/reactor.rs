use std::sync::Arc;

use super::action::{ExploreAction, ExploreMutation};
use super::state::ExploreState;
use crate::api::ApiError;
use crate::domain::{SortOption, Story, StoryRepository, TipRepository};
use crate::storage::BlockList;
use crate::ui::mvi::{Mutations, Reactor, Reducer};

pub const STORIES_FAILED_TOAST: &str = "Couldn't load stories.";
pub const TIPS_FAILED_TOAST: &str = "Couldn't load tips. Please try again later.";

pub struct ExploreReactor {
    stories: Arc<dyn StoryRepository>,
    tips: Arc<dyn TipRepository>,
    block_list: Arc<BlockList>,
}

impl ExploreReactor {
    pub fn new(
        stories: Arc<dyn StoryRepository>,
        tips: Arc<dyn TipRepository>,
        block_list: Arc<BlockList>,
    ) -> Self {
        Self {
            stories,
            tips,
            block_list,
        }
    }

    fn fetch_stories(&self) -> Mutations<ExploreMutation> {
        let stories = Arc::clone(&self.stories);
        let block_list = Arc::clone(&self.block_list);
        Mutations::try_task(
            async move {
                let fetched = stories.fetch_stories().await?;
                let visible = fetched
                    .into_iter()
                    .filter(|story| story.user_id.map_or(true, |id| !block_list.is_blocked(id)))
                    .collect();
                Ok::<_, ApiError>(Mutations::just(ExploreMutation::SetStories(visible)))
            },
            |err: ApiError| {
                tracing::warn!(error = %err, "Failed to fetch stories");
                Mutations::just(ExploreMutation::SetToast(STORIES_FAILED_TOAST.to_string()))
            },
        )
    }

    fn fetch_tips(&self, sort: SortOption) -> Mutations<ExploreMutation> {
        let tips = Arc::clone(&self.tips);
        let block_list = Arc::clone(&self.block_list);
        Mutations::try_task(
            async move {
                let fetched = tips.fetch_tips(sort).await?;
                let visible = sort.sorted(block_list.filter_tips(fetched));
                Ok::<_, ApiError>(Mutations::just(ExploreMutation::SetTips(visible)))
            },
            |err: ApiError| {
                tracing::warn!(error = %err, "Failed to fetch explore tips");
                Mutations::just(ExploreMutation::SetToast(TIPS_FAILED_TOAST.to_string()))
            },
        )
    }
}

impl Reducer for ExploreReactor {
    type State = ExploreState;
    type Mutation = ExploreMutation;

    fn reduce(mut state: ExploreState, mutation: ExploreMutation) -> ExploreState {
        match mutation {
            ExploreMutation::SetLoading(loading) => state.is_loading = loading,
            ExploreMutation::SetStories(stories) => {
                state.stories.truncate(1);
                state
                    .stories
                    .extend(stories.into_iter().filter(|story| !story.is_all_tips()));
            }
            ExploreMutation::SetTips(tips) => state.tips = tips,
            ExploreMutation::SetSortOption(option) => state.sort_option = option,
            ExploreMutation::SetSelectedStory(name) => state.selected_story = name,
            ExploreMutation::SetToast(message) => state.toast.set(message),
        }
        state
    }
}

impl Reactor for ExploreReactor {
    type Action = ExploreAction;

    fn initial_state(&self) -> ExploreState {
        ExploreState::default()
    }

    fn mutate(&self, action: ExploreAction, state: &ExploreState) -> Mutations<ExploreMutation> {
        match action {
            ExploreAction::ViewDidLoad => Mutations::concat([
                Mutations::just(ExploreMutation::SetLoading(true)),
                Mutations::merge([self.fetch_stories(), self.fetch_tips(state.sort_option)]),
                Mutations::just(ExploreMutation::SetLoading(false)),
            ]),
            ExploreAction::SortButtonTapped(option) => Mutations::sequence([
                ExploreMutation::SetTips(option.sorted(state.tips.clone())),
                ExploreMutation::SetSortOption(option),
            ]),
            ExploreAction::StoryCellTapped(name) => {
                let known = state.stories.iter().any(|story| story.user_name == name);
                if known {
                    Mutations::just(ExploreMutation::SetSelectedStory(name))
                } else {
                    tracing::debug!(name = %name, "Tapped story is not in the strip");
                    Mutations::just(ExploreMutation::SetSelectedStory(Story::ALL_TIPS.to_string()))
                }
            }
        }
    }
}
