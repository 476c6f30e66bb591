//! Data access contracts consumed by the screens.
//!
//! The HTTP implementations live in [`crate::api::repositories`]; tests
//! provide in-memory fakes.

use async_trait::async_trait;

use super::{Account, MyProfile, SortOption, Story, Tip, UserProfile};
use crate::api::ApiError;
use crate::config::LoginCredentials;

#[async_trait]
pub trait TipRepository: Send + Sync {
    async fn fetch_tips(&self, sort: SortOption) -> Result<Vec<Tip>, ApiError>;

    async fn fetch_tips_for_user(&self, user_id: i64) -> Result<Vec<Tip>, ApiError>;

    async fn search_tips(&self, keyword: &str, sort: SortOption) -> Result<Vec<Tip>, ApiError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn fetch_my_profile(&self) -> Result<MyProfile, ApiError>;

    async fn fetch_user_profile(&self, user_id: i64) -> Result<UserProfile, ApiError>;

    /// Subscribe when not following, unsubscribe otherwise.
    async fn toggle_subscription(&self, user_id: i64) -> Result<(), ApiError>;

    async fn report_user(&self, user_id: i64) -> Result<(), ApiError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Account, ApiError>;

    async fn request_verification_code(&self, email: &str) -> Result<(), ApiError>;

    async fn check_verification_code(&self, code: &str) -> Result<(), ApiError>;
}

#[async_trait]
pub trait StoryRepository: Send + Sync {
    async fn fetch_stories(&self) -> Result<Vec<Story>, ApiError>;
}
