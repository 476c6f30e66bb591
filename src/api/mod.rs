//! HTTP access to the EveryTip backend.

mod client;
pub mod dto;
mod error;
pub mod repositories;
mod target;
mod targets;

pub use client::{ApiResponse, HttpClient};
pub use error::ApiError;
pub use repositories::{
    RemoteAuthRepository, RemoteStoryRepository, RemoteTipRepository, RemoteUserRepository,
};
pub use target::{HttpMethod, Target};
pub use targets::{AuthTarget, StoryTarget, TipTarget, UserTarget};
