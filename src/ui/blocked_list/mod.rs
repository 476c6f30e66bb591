//! List of locally blocked users with an unblock action.

mod reactor;

pub use reactor::{
    BlockedListAction, BlockedListMutation, BlockedListReactor, BlockedListState,
    UNBLOCKED_TOAST, UNBLOCK_FAILED_TOAST,
};
