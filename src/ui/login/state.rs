use crate::config::{LoginCredentials, SecureString};
use crate::ui::mvi::{Pulse, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub email: String,
    pub password: SecureString,
    pub is_login_enabled: bool,
    pub is_loading: bool,
    pub toast: Pulse<String>,
    /// Close the login screen after a successful sign-in.
    pub dismiss_signal: Pulse<()>,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials::new(self.email.clone(), self.password.clone())
    }
}
