//! Reducer and reactor traits for MVI architecture.

use super::action::Action;
use super::mutations::Mutations;
use super::state::UiState;

/// Reducer transforms state based on mutations.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Mutation) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The mutation type this reducer folds.
    type Mutation: std::fmt::Debug + Send + 'static;

    /// Fold a mutation into the state and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State;
}

/// A screen's reactor: turns actions into mutation producers.
///
/// `mutate` may read the current state (for example to toggle a flag or to
/// re-sort loaded items) but must not perform side effects outside the
/// returned [`Mutations`], except short synchronous storage calls.
pub trait Reactor: Reducer + Send + Sync + 'static {
    /// The action type accepted by this reactor.
    type Action: Action;

    /// State the store is seeded with.
    fn initial_state(&self) -> Self::State;

    /// Map an action to a producer of mutations.
    fn mutate(&self, action: Self::Action, state: &Self::State) -> Mutations<Self::Mutation>;
}
