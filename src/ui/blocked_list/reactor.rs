use std::sync::Arc;

use crate::storage::BlockList;
use crate::ui::mvi::{Action, Mutations, Pulse, Reactor, Reducer, UiState};

pub const UNBLOCKED_TOAST: &str = "User unblocked.";
pub const UNBLOCK_FAILED_TOAST: &str = "Couldn't unblock the user. Please try again.";

#[derive(Debug, Clone)]
pub enum BlockedListAction {
    ViewDidLoad,
    UnblockTapped(i64),
}

impl Action for BlockedListAction {}

#[derive(Debug, Clone)]
pub enum BlockedListMutation {
    SetBlockedIds(Vec<i64>),
    SetToast(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockedListState {
    pub blocked_ids: Vec<i64>,
    pub toast: Pulse<String>,
}

impl UiState for BlockedListState {}

impl BlockedListState {
    /// Nothing blocked: the screen shows a placeholder instead of the list.
    pub fn show_placeholder(&self) -> bool {
        self.blocked_ids.is_empty()
    }
}

pub struct BlockedListReactor {
    block_list: Arc<BlockList>,
}

impl BlockedListReactor {
    pub fn new(block_list: Arc<BlockList>) -> Self {
        Self { block_list }
    }
}

impl Reducer for BlockedListReactor {
    type State = BlockedListState;
    type Mutation = BlockedListMutation;

    fn reduce(mut state: BlockedListState, mutation: BlockedListMutation) -> BlockedListState {
        match mutation {
            BlockedListMutation::SetBlockedIds(ids) => state.blocked_ids = ids,
            BlockedListMutation::SetToast(message) => state.toast.set(message),
        }
        state
    }
}

impl Reactor for BlockedListReactor {
    type Action = BlockedListAction;

    fn initial_state(&self) -> BlockedListState {
        BlockedListState::default()
    }

    fn mutate(
        &self,
        action: BlockedListAction,
        _state: &BlockedListState,
    ) -> Mutations<BlockedListMutation> {
        match action {
            BlockedListAction::ViewDidLoad => {
                Mutations::just(BlockedListMutation::SetBlockedIds(self.block_list.blocked_ids()))
            }
            BlockedListAction::UnblockTapped(user_id) => match self.block_list.unblock(user_id) {
                Ok(()) => Mutations::sequence([
                    BlockedListMutation::SetBlockedIds(self.block_list.blocked_ids()),
                    BlockedListMutation::SetToast(UNBLOCKED_TOAST.to_string()),
                ]),
                Err(err) => {
                    tracing::warn!(error = %err, user_id, "Failed to unblock user");
                    Mutations::just(BlockedListMutation::SetToast(UNBLOCK_FAILED_TOAST.to_string()))
                }
            },
        }
    }
}
