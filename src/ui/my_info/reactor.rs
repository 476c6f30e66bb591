use std::sync::Arc;

use super::action::{MyInfoAction, MyInfoMutation};
use super::state::{MenuItem, MyInfoNavigation, MyInfoState};
use crate::domain::{MyProfile, UserRepository};
use crate::storage::{StorageError, TokenKind, TokenStore};
use crate::ui::mvi::{Mutations, Reactor, Reducer};

pub const LOGGED_OUT_TOAST: &str = "You have been logged out.";
pub const NOT_LOGGED_IN_TOAST: &str = "You are not logged in.";
pub const LOGOUT_FAILED_TOAST: &str = "Couldn't log out. Please try again later.";

pub struct MyInfoReactor {
    users: Arc<dyn UserRepository>,
    tokens: TokenStore,
    app_version: String,
}

impl MyInfoReactor {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenStore, app_version: String) -> Self {
        Self {
            users,
            tokens,
            app_version,
        }
    }

    fn items(&self) -> Vec<MenuItem> {
        MenuItem::menu(self.tokens.is_logged_in(), &self.app_version)
    }

    fn guest(&self) -> Mutations<MyInfoMutation> {
        Mutations::sequence([
            MyInfoMutation::SetMyProfile(MyProfile::guest()),
            MyInfoMutation::SetItems(self.items()),
        ])
    }

    /// The profile endpoint fails without a token, so any failure falls back
    /// to the guest profile instead of a toast.
    fn refresh(&self) -> Mutations<MyInfoMutation> {
        let users = Arc::clone(&self.users);
        let tokens = self.tokens.clone();
        let version = self.app_version.clone();

        let fetch = Mutations::task(async move {
            let profile = match users.fetch_my_profile().await {
                Ok(profile) => profile,
                Err(err) => {
                    tracing::debug!(error = %err, "Profile unavailable, showing guest");
                    MyProfile::guest()
                }
            };
            Mutations::sequence([
                MyInfoMutation::SetMyProfile(profile),
                MyInfoMutation::SetItems(MenuItem::menu(tokens.is_logged_in(), &version)),
            ])
        });

        Mutations::concat([
            Mutations::just(MyInfoMutation::SetLoading(true)),
            fetch,
            Mutations::just(MyInfoMutation::SetLoading(false)),
        ])
    }

    fn delete_tokens(&self) -> Result<(), StorageError> {
        self.tokens.delete(TokenKind::Access)?;
        self.tokens.delete(TokenKind::Refresh)
    }

    fn logout(&self) -> Mutations<MyInfoMutation> {
        if !self.tokens.is_logged_in() {
            return Mutations::just(MyInfoMutation::SetToast(NOT_LOGGED_IN_TOAST.to_string()));
        }
        if let Err(err) = self.delete_tokens() {
            tracing::warn!(error = %err, "Failed to delete tokens");
            return Mutations::just(MyInfoMutation::SetToast(LOGOUT_FAILED_TOAST.to_string()));
        }
        tracing::info!("Logged out");
        self.guest().then(Mutations::sequence([
            MyInfoMutation::SetToast(LOGGED_OUT_TOAST.to_string()),
            MyInfoMutation::SetLogoutConfirmed,
        ]))
    }

    fn navigate(destination: MyInfoNavigation) -> Mutations<MyInfoMutation> {
        Mutations::just(MyInfoMutation::SetNavigation(destination))
    }
}

impl Reducer for MyInfoReactor {
    type State = MyInfoState;
    type Mutation = MyInfoMutation;

    fn reduce(mut state: MyInfoState, mutation: MyInfoMutation) -> MyInfoState {
        match mutation {
            MyInfoMutation::SetLoading(loading) => state.is_loading = loading,
            MyInfoMutation::SetMyProfile(profile) => state.my_profile = profile,
            MyInfoMutation::SetItems(items) => state.items = items,
            MyInfoMutation::SetToast(message) => state.toast.set(message),
            MyInfoMutation::SetNavigation(destination) => state.navigation.set(destination),
            MyInfoMutation::SetLogoutConfirmed => state.logout_confirmed.set(()),
        }
        state
    }
}

impl Reactor for MyInfoReactor {
    type Action = MyInfoAction;

    fn initial_state(&self) -> MyInfoState {
        MyInfoState {
            items: self.items(),
            ..MyInfoState::default()
        }
    }

    fn mutate(&self, action: MyInfoAction, _state: &MyInfoState) -> Mutations<MyInfoMutation> {
        match action {
            MyInfoAction::Refresh => self.refresh(),
            MyInfoAction::ApplyGuestProfile => self.guest(),
            MyInfoAction::LogoutConfirmTapped => self.logout(),
            MyInfoAction::AgreementCellTapped => Self::navigate(MyInfoNavigation::Agreement),
            MyInfoAction::LogoutCellTapped => Self::navigate(MyInfoNavigation::Logout),
            MyInfoAction::EditProfileButtonTapped => Self::navigate(MyInfoNavigation::EditProfile),
            MyInfoAction::SetCategoryButtonTapped => {
                Self::navigate(MyInfoNavigation::SetCategories)
            }
            MyInfoAction::SetSubscribeButtonTapped => {
                Self::navigate(MyInfoNavigation::SetSubscribe)
            }
            MyInfoAction::LoginCellTapped => Self::navigate(MyInfoNavigation::Login),
        }
    }
}
