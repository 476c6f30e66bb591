use std::sync::Arc;

use super::action::{UserProfileAction, UserProfileMutation};
use super::state::UserProfileState;
use crate::api::ApiError;
use crate::domain::{TipRepository, UserRepository};
use crate::storage::BlockList;
use crate::ui::mvi::{Mutations, Reactor, Reducer};

pub const PROFILE_UNAVAILABLE_TOAST: &str = "Failed to load user information.";
pub const SUBSCRIBED_TOAST: &str = "Subscribed.";
pub const UNSUBSCRIBED_TOAST: &str = "Subscription removed.";
pub const REPORTED_TOAST: &str = "Your report has been received.";
pub const ALREADY_BLOCKED_TOAST: &str = "You have already blocked this user.";
pub const BLOCKED_TOAST: &str = "User blocked. You will no longer see their content.";
pub const GENERIC_FAILURE_TOAST: &str = "Something went wrong. Please try again later.";

fn toast(message: &str) -> Mutations<UserProfileMutation> {
    Mutations::just(UserProfileMutation::SetToast(message.to_string()))
}

pub struct UserProfileReactor {
    user_id: i64,
    users: Arc<dyn UserRepository>,
    tips: Arc<dyn TipRepository>,
    block_list: Arc<BlockList>,
}

impl UserProfileReactor {
    pub fn new(
        user_id: i64,
        users: Arc<dyn UserRepository>,
        tips: Arc<dyn TipRepository>,
        block_list: Arc<BlockList>,
    ) -> Self {
        Self {
            user_id,
            users,
            tips,
            block_list,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    fn load(&self, state: &UserProfileState) -> Mutations<UserProfileMutation> {
        let user_id = self.user_id;
        let sort = state.sort_option;

        let tips = Arc::clone(&self.tips);
        let block_list = Arc::clone(&self.block_list);
        let fetch_tips = Mutations::try_task(
            async move {
                let fetched = tips.fetch_tips_for_user(user_id).await?;
                let visible = sort.sorted(block_list.filter_tips(fetched));
                Ok::<_, ApiError>(Mutations::just(UserProfileMutation::SetTips(visible)))
            },
            move |err: ApiError| {
                tracing::warn!(error = %err, user_id, "Failed to fetch user tips");
                toast(GENERIC_FAILURE_TOAST)
            },
        );

        let users = Arc::clone(&self.users);
        let fetch_profile = Mutations::try_task(
            async move {
                let profile = users.fetch_user_profile(user_id).await?;
                Ok::<_, ApiError>(Mutations::just(UserProfileMutation::SetUserProfile(profile)))
            },
            move |err: ApiError| {
                tracing::warn!(error = %err, user_id, "Failed to fetch user profile");
                toast(PROFILE_UNAVAILABLE_TOAST)
            },
        );

        Mutations::concat([
            Mutations::just(UserProfileMutation::SetLoading(true)),
            Mutations::merge([fetch_tips, fetch_profile]),
            Mutations::just(UserProfileMutation::SetLoading(false)),
        ])
    }

    fn toggle_subscription(&self, state: &UserProfileState) -> Mutations<UserProfileMutation> {
        let Some(is_following) = state.user_profile.as_ref().map(|p| p.is_following) else {
            return toast(PROFILE_UNAVAILABLE_TOAST);
        };
        let message = if is_following {
            UNSUBSCRIBED_TOAST
        } else {
            SUBSCRIBED_TOAST
        };

        let user_id = self.user_id;
        let users = Arc::clone(&self.users);
        Mutations::try_task(
            async move {
                users.toggle_subscription(user_id).await?;
                let updated = users.fetch_user_profile(user_id).await?;
                Ok::<_, ApiError>(Mutations::sequence([
                    UserProfileMutation::SetUserProfile(updated),
                    UserProfileMutation::SetToast(message.to_string()),
                ]))
            },
            move |err: ApiError| {
                tracing::warn!(error = %err, user_id, "Failed to toggle subscription");
                toast(GENERIC_FAILURE_TOAST)
            },
        )
    }

    fn report(&self) -> Mutations<UserProfileMutation> {
        let user_id = self.user_id;
        let users = Arc::clone(&self.users);
        Mutations::try_task(
            async move {
                users.report_user(user_id).await?;
                tracing::info!(user_id, "User reported");
                Ok::<_, ApiError>(toast(REPORTED_TOAST))
            },
            move |err: ApiError| {
                tracing::warn!(error = %err, user_id, "Failed to report user");
                toast(GENERIC_FAILURE_TOAST)
            },
        )
    }

    fn block(&self) -> Mutations<UserProfileMutation> {
        if self.block_list.is_blocked(self.user_id) {
            return toast(ALREADY_BLOCKED_TOAST);
        }
        match self.block_list.block(self.user_id) {
            Ok(()) => toast(BLOCKED_TOAST),
            Err(err) => {
                tracing::warn!(error = %err, user_id = self.user_id, "Failed to block user");
                toast(GENERIC_FAILURE_TOAST)
            }
        }
    }
}

impl Reducer for UserProfileReactor {
    type State = UserProfileState;
    type Mutation = UserProfileMutation;

    fn reduce(mut state: UserProfileState, mutation: UserProfileMutation) -> UserProfileState {
        match mutation {
            UserProfileMutation::SetLoading(loading) => state.is_loading = loading,
            UserProfileMutation::SetUserProfile(profile) => state.user_profile = Some(profile),
            UserProfileMutation::SetTips(tips) => state.tips = tips,
            UserProfileMutation::SetSortOption(option) => state.sort_option = option,
            UserProfileMutation::SetSelectedTip(tip) => state.selected_tip = Some(tip),
            UserProfileMutation::SetPushSignal => state.push_signal.set(()),
            UserProfileMutation::SetEllipsisSignal => state.ellipsis_signal.set(()),
            UserProfileMutation::SetToast(message) => state.toast.set(message),
        }
        state
    }
}

impl Reactor for UserProfileReactor {
    type Action = UserProfileAction;

    fn initial_state(&self) -> UserProfileState {
        UserProfileState::default()
    }

    fn mutate(
        &self,
        action: UserProfileAction,
        state: &UserProfileState,
    ) -> Mutations<UserProfileMutation> {
        match action {
            UserProfileAction::ViewDidLoad => self.load(state),
            UserProfileAction::SubscribeButtonTapped => self.toggle_subscription(state),
            UserProfileAction::SortButtonTapped(option) => Mutations::sequence([
                UserProfileMutation::SetTips(option.sorted(state.tips.clone())),
                UserProfileMutation::SetSortOption(option),
            ]),
            UserProfileAction::ItemSelected(tip) => Mutations::sequence([
                UserProfileMutation::SetSelectedTip(tip),
                UserProfileMutation::SetPushSignal,
            ]),
            UserProfileAction::ProfileEllipsisButtonTapped => {
                Mutations::just(UserProfileMutation::SetEllipsisSignal)
            }
            UserProfileAction::ReportUser => self.report(),
            UserProfileAction::BlockUser => self.block(),
        }
    }
}
