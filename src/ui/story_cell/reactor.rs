use crate::ui::mvi::{Action, Mutations, Reactor, Reducer, UiState};

#[derive(Debug, Clone)]
pub enum StoryCellAction {
    CellSelected,
}

impl Action for StoryCellAction {}

#[derive(Debug, Clone)]
pub enum StoryCellMutation {
    SetSelected(bool),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoryCellState {
    pub is_selected: bool,
}

impl UiState for StoryCellState {}

#[derive(Default)]
pub struct StoryCellReactor;

impl Reducer for StoryCellReactor {
    type State = StoryCellState;
    type Mutation = StoryCellMutation;

    fn reduce(_state: StoryCellState, mutation: StoryCellMutation) -> StoryCellState {
        match mutation {
            StoryCellMutation::SetSelected(is_selected) => StoryCellState { is_selected },
        }
    }
}

impl Reactor for StoryCellReactor {
    type Action = StoryCellAction;

    fn initial_state(&self) -> StoryCellState {
        StoryCellState::default()
    }

    fn mutate(&self, action: StoryCellAction, state: &StoryCellState) -> Mutations<StoryCellMutation> {
        match action {
            StoryCellAction::CellSelected => {
                Mutations::just(StoryCellMutation::SetSelected(!state.is_selected))
            }
        }
    }
}
