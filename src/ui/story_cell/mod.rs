//! Selection state of a single story strip entry.

mod reactor;

pub use reactor::{StoryCellAction, StoryCellMutation, StoryCellReactor, StoryCellState};
