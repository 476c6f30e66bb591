//! Repository implementations backed by [`HttpClient`].

use async_trait::async_trait;

use super::client::HttpClient;
use super::dto::{AccountDto, MyProfileDto, StoryDto, TipDto, UserProfileDto};
use super::error::ApiError;
use super::targets::{AuthTarget, StoryTarget, TipTarget, UserTarget};
use crate::config::LoginCredentials;
use crate::domain::{
    Account, AuthRepository, MyProfile, SortOption, Story, StoryRepository, Tip, TipRepository,
    UserProfile, UserRepository,
};

fn tips_into_domain(dtos: Vec<TipDto>) -> Vec<Tip> {
    dtos.into_iter().map(TipDto::into_domain).collect()
}

pub struct RemoteTipRepository {
    client: HttpClient,
}

impl RemoteTipRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TipRepository for RemoteTipRepository {
    async fn fetch_tips(&self, sort: SortOption) -> Result<Vec<Tip>, ApiError> {
        let dtos: Vec<TipDto> = self.client.request(&TipTarget::GetTips { sort }).await?;
        Ok(tips_into_domain(dtos))
    }

    async fn fetch_tips_for_user(&self, user_id: i64) -> Result<Vec<Tip>, ApiError> {
        let dtos: Vec<TipDto> = self
            .client
            .request(&TipTarget::GetUserTips { user_id })
            .await?;
        Ok(tips_into_domain(dtos))
    }

    async fn search_tips(&self, keyword: &str, sort: SortOption) -> Result<Vec<Tip>, ApiError> {
        let target = TipTarget::SearchTips {
            keyword: keyword.to_string(),
            sort,
        };
        let dtos: Vec<TipDto> = self.client.request(&target).await?;
        Ok(tips_into_domain(dtos))
    }
}

pub struct RemoteUserRepository {
    client: HttpClient,
}

impl RemoteUserRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for RemoteUserRepository {
    async fn fetch_my_profile(&self) -> Result<MyProfile, ApiError> {
        let dto: MyProfileDto = self.client.request(&UserTarget::GetMyProfile).await?;
        Ok(dto.into_domain())
    }

    async fn fetch_user_profile(&self, user_id: i64) -> Result<UserProfile, ApiError> {
        let dto: UserProfileDto = self
            .client
            .request(&UserTarget::GetUserProfile { user_id })
            .await?;
        Ok(dto.into_domain())
    }

    async fn toggle_subscription(&self, user_id: i64) -> Result<(), ApiError> {
        self.client
            .execute(&UserTarget::PostToggleSubscription { user_id })
            .await
    }

    async fn report_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.client
            .execute(&UserTarget::PostReportUser { user_id })
            .await
    }
}

pub struct RemoteAuthRepository {
    client: HttpClient,
}

impl RemoteAuthRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for RemoteAuthRepository {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Account, ApiError> {
        let target = AuthTarget::PostUserLogin {
            email: credentials.email.trim().to_string(),
            password: credentials.password.expose().to_string(),
        };
        let dto: AccountDto = self.client.request(&target).await?;
        Ok(dto.into_domain())
    }

    async fn request_verification_code(&self, email: &str) -> Result<(), ApiError> {
        self.client
            .execute(&AuthTarget::PostVerificationCode {
                email: email.to_string(),
            })
            .await
    }

    async fn check_verification_code(&self, code: &str) -> Result<(), ApiError> {
        self.client
            .execute(&AuthTarget::GetCheckVerificationCode {
                code: code.to_string(),
            })
            .await
    }
}

pub struct RemoteStoryRepository {
    client: HttpClient,
}

impl RemoteStoryRepository {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StoryRepository for RemoteStoryRepository {
    async fn fetch_stories(&self) -> Result<Vec<Story>, ApiError> {
        let dtos: Vec<StoryDto> = self.client.request(&StoryTarget::GetStories).await?;
        Ok(dtos.into_iter().map(StoryDto::into_domain).collect())
    }
}
