use std::sync::Arc;

use super::action::{LoginAction, LoginMutation};
use super::state::LoginState;
use crate::api::ApiError;
use crate::domain::AuthRepository;
use crate::storage::TokenStore;
use crate::ui::mvi::{Mutations, Reactor, Reducer};

pub const LOGIN_SUCCEEDED_TOAST: &str = "Welcome back!";
pub const INVALID_CREDENTIALS_TOAST: &str = "The email or password is incorrect.";
pub const UNKNOWN_ACCOUNT_TOAST: &str = "No account is registered with this email.";
pub const LOGIN_FAILED_TOAST: &str = "Couldn't log in. Please try again later.";

/// Toast for a failed sign-in request.
fn failure_toast(err: &ApiError) -> &'static str {
    match err.status() {
        Some(401) => INVALID_CREDENTIALS_TOAST,
        Some(404) => UNKNOWN_ACCOUNT_TOAST,
        _ => LOGIN_FAILED_TOAST,
    }
}

pub struct LoginReactor {
    auth: Arc<dyn AuthRepository>,
    tokens: TokenStore,
}

impl LoginReactor {
    pub fn new(auth: Arc<dyn AuthRepository>, tokens: TokenStore) -> Self {
        Self { auth, tokens }
    }

    fn login(&self, state: &LoginState) -> Mutations<LoginMutation> {
        if !state.is_login_enabled || state.is_loading {
            return Mutations::empty();
        }

        let credentials = state.credentials();
        let auth = Arc::clone(&self.auth);
        let tokens = self.tokens.clone();
        let sign_in = Mutations::task(async move {
            let account = match auth.login(&credentials).await {
                Ok(account) => account,
                Err(err) => {
                    tracing::warn!(error = %err, kind = err.error_type(), "Login failed");
                    return Mutations::just(LoginMutation::SetToast(failure_toast(&err).to_string()));
                }
            };
            if let Err(err) = tokens.save_account(&account) {
                tracing::warn!(error = %err, "Failed to persist tokens");
                return Mutations::just(LoginMutation::SetToast(LOGIN_FAILED_TOAST.to_string()));
            }
            tracing::info!(user_id = account.id, "Logged in");
            Mutations::sequence([
                LoginMutation::SetToast(LOGIN_SUCCEEDED_TOAST.to_string()),
                LoginMutation::SetDismissSignal,
            ])
        });

        Mutations::concat([
            Mutations::just(LoginMutation::SetLoading(true)),
            sign_in,
            Mutations::just(LoginMutation::SetLoading(false)),
        ])
    }
}

impl Reducer for LoginReactor {
    type State = LoginState;
    type Mutation = LoginMutation;

    fn reduce(mut state: LoginState, mutation: LoginMutation) -> LoginState {
        match mutation {
            LoginMutation::SetEmail(email) => {
                state.email = email;
                state.is_login_enabled = state.credentials().is_complete();
            }
            LoginMutation::SetPassword(password) => {
                state.password = password;
                state.is_login_enabled = state.credentials().is_complete();
            }
            LoginMutation::SetLoading(loading) => state.is_loading = loading,
            LoginMutation::SetToast(message) => state.toast.set(message),
            LoginMutation::SetDismissSignal => state.dismiss_signal.set(()),
        }
        state
    }
}

impl Reactor for LoginReactor {
    type Action = LoginAction;

    fn initial_state(&self) -> LoginState {
        LoginState::default()
    }

    fn mutate(&self, action: LoginAction, state: &LoginState) -> Mutations<LoginMutation> {
        match action {
            LoginAction::EmailChanged(email) => Mutations::just(LoginMutation::SetEmail(email)),
            LoginAction::PasswordChanged(password) => {
                Mutations::just(LoginMutation::SetPassword(password))
            }
            LoginAction::LoginTapped => self.login(state),
        }
    }
}
