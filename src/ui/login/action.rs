use crate::config::SecureString;
use crate::ui::mvi::Action;

#[derive(Debug, Clone)]
pub enum LoginAction {
    EmailChanged(String),
    PasswordChanged(SecureString),
    LoginTapped,
}

impl Action for LoginAction {}

#[derive(Debug, Clone)]
pub enum LoginMutation {
    SetEmail(String),
    SetPassword(SecureString),
    SetLoading(bool),
    SetToast(String),
    SetDismissSignal,
}
