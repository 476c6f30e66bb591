//! Screen state machines.
//!
//! Every screen is a [`mvi::Reactor`] driven by an [`mvi::Store`]; rendering
//! is left to the embedding application.

pub mod blocked_list;
pub mod explore;
pub mod home;
pub mod login;
pub mod my_info;
pub mod mvi;
pub mod search;
pub mod story_cell;
pub mod user_profile;

#[cfg(test)]
pub(crate) mod fakes;
