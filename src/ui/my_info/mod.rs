//! "My info" tab: own profile, settings menu and logout.

mod action;
mod reactor;
mod state;

pub use action::{MyInfoAction, MyInfoMutation};
pub use reactor::{MyInfoReactor, LOGGED_OUT_TOAST, LOGOUT_FAILED_TOAST, NOT_LOGGED_IN_TOAST};
pub use state::{MenuItem, MyInfoNavigation, MyInfoState};
