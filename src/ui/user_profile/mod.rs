//! Another user's profile: their tips, subscription, report and block.

mod action;
mod reactor;
mod state;

pub use action::{UserProfileAction, UserProfileMutation};
pub use reactor::{
    UserProfileReactor, ALREADY_BLOCKED_TOAST, BLOCKED_TOAST, GENERIC_FAILURE_TOAST,
    PROFILE_UNAVAILABLE_TOAST, REPORTED_TOAST, SUBSCRIBED_TOAST, UNSUBSCRIBED_TOAST,
};
pub use state::UserProfileState;
