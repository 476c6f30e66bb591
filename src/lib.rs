//! EveryTip client core.
//!
//! Screen state lives in reactive stores ([`ui::mvi::Store`]) driven by one
//! reactor per screen. Reactors reach the backend through the repository
//! traits in [`domain`], implemented over HTTP in [`api`], and keep local
//! state (tokens, block list, recent searches) in [`storage`].

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod storage;
pub mod ui;
