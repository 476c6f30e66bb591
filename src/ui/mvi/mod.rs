//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! This module provides the reactive state store that drives unidirectional
//! data flow in the client core.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reactor::mutate ──→ Mutations ──→ Reducer ──→ State ──→ View
//!    ↑                                                               │
//!    └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: user intent or lifecycle event
//! - **Mutation**: granular state delta, possibly produced asynchronously
//! - **State**: immutable snapshot, including one-shot [`Pulse`] fields
//! - **Store**: folds mutations in arrival order and publishes every snapshot

mod action;
mod dispose;
mod mutations;
mod pulse;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use dispose::DisposeBag;
pub use mutations::Mutations;
pub use pulse::{Pulse, PulseReader};
pub use reducer::{Reactor, Reducer};
pub use state::UiState;
pub use store::{PulseStream, StateStream, Store};
