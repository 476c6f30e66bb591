//! Email sign-in.

mod action;
mod reactor;
mod state;

pub use action::{LoginAction, LoginMutation};
pub use reactor::{
    LoginReactor, INVALID_CREDENTIALS_TOAST, LOGIN_FAILED_TOAST, LOGIN_SUCCEEDED_TOAST,
    UNKNOWN_ACCOUNT_TOAST,
};
pub use state::LoginState;
