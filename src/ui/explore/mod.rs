//! Explore screen: story strip of followed writers above a tip listing.

mod action;
mod reactor;
mod state;

pub use action::{ExploreAction, ExploreMutation};
pub use reactor::{ExploreReactor, STORIES_FAILED_TOAST, TIPS_FAILED_TOAST};
pub use state::ExploreState;
