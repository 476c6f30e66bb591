//! Home feed.

mod action;
mod reactor;
mod state;

pub use action::{HomeAction, HomeMutation};
pub use reactor::{HomeReactor, FETCH_FAILED_TOAST};
pub use state::HomeState;
