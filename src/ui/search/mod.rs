//! Tip search with locally stored recent keywords.

mod action;
mod reactor;
mod state;

pub use action::{SearchAction, SearchMutation};
pub use reactor::{SearchReactor, EMPTY_KEYWORD_TOAST, SEARCH_FAILED_TOAST};
pub use state::SearchState;
