//! In-memory repositories for reactor tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::api::ApiError;
use crate::config::LoginCredentials;
use crate::domain::{
    Account, AuthRepository, MyProfile, SortOption, Story, StoryRepository, Tip, TipRepository,
    UserProfile, UserRepository,
};
use crate::storage::{BlockList, KeyValueStore, MemoryKeyValueStore};

pub(crate) fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        code: String::new(),
        message: "boom".to_string(),
    }
}

pub(crate) fn tip(id: i64, writer_id: i64, writer_name: &str) -> Tip {
    Tip {
        id,
        title: format!("tip {}", id),
        writer_id,
        writer_name: writer_name.to_string(),
        created_at: format!("2025-01-{:02}T00:00:00", id),
        view_count: id as u64 * 10,
        like_count: 100 - id as u64,
        ..Tip::default()
    }
}

pub(crate) fn memory_storage() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryKeyValueStore::new())
}

pub(crate) fn block_list() -> Arc<BlockList> {
    Arc::new(BlockList::new(memory_storage()))
}

#[derive(Default)]
pub(crate) struct FakeTipRepository {
    pub tips: Vec<Tip>,
    pub fail: bool,
    pub requests: Mutex<Vec<String>>,
}

impl FakeTipRepository {
    pub fn with_tips(tips: Vec<Tip>) -> Self {
        Self {
            tips,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn answer(&self, request: String) -> Result<Vec<Tip>, ApiError> {
        self.requests.lock().push(request);
        if self.fail {
            return Err(server_error());
        }
        Ok(self.tips.clone())
    }
}

#[async_trait]
impl TipRepository for FakeTipRepository {
    async fn fetch_tips(&self, sort: SortOption) -> Result<Vec<Tip>, ApiError> {
        self.answer(format!("feed:{}", sort.as_query()))
    }

    async fn fetch_tips_for_user(&self, user_id: i64) -> Result<Vec<Tip>, ApiError> {
        self.answer(format!("user:{}", user_id))
    }

    async fn search_tips(&self, keyword: &str, sort: SortOption) -> Result<Vec<Tip>, ApiError> {
        self.answer(format!("search:{}:{}", keyword, sort.as_query()))
    }
}

#[derive(Default)]
pub(crate) struct FakeUserRepository {
    pub profile: Mutex<Option<UserProfile>>,
    pub my_profile: Option<MyProfile>,
    pub fail_report: bool,
    pub reports: Mutex<Vec<i64>>,
    pub toggles: Mutex<Vec<i64>>,
}

impl FakeUserRepository {
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Mutex::new(Some(profile)),
            ..Self::default()
        }
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn fetch_my_profile(&self) -> Result<MyProfile, ApiError> {
        self.my_profile.clone().ok_or_else(server_error)
    }

    async fn fetch_user_profile(&self, _user_id: i64) -> Result<UserProfile, ApiError> {
        self.profile.lock().clone().ok_or_else(server_error)
    }

    async fn toggle_subscription(&self, user_id: i64) -> Result<(), ApiError> {
        self.toggles.lock().push(user_id);
        let mut profile = self.profile.lock();
        match profile.as_mut() {
            Some(profile) => {
                profile.is_following = !profile.is_following;
                if profile.is_following {
                    profile.subscriber_count += 1;
                } else {
                    profile.subscriber_count = profile.subscriber_count.saturating_sub(1);
                }
                Ok(())
            }
            None => Err(server_error()),
        }
    }

    async fn report_user(&self, user_id: i64) -> Result<(), ApiError> {
        if self.fail_report {
            return Err(server_error());
        }
        self.reports.lock().push(user_id);
        Ok(())
    }
}

pub(crate) struct FakeAuthRepository {
    pub result: Mutex<Option<Result<Account, ApiError>>>,
    pub attempts: Mutex<Vec<String>>,
}

impl FakeAuthRepository {
    pub fn answering(result: Result<Account, ApiError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            attempts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuthRepository for FakeAuthRepository {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Account, ApiError> {
        self.attempts.lock().push(credentials.email.clone());
        self.result.lock().take().unwrap_or_else(|| Err(server_error()))
    }

    async fn request_verification_code(&self, _email: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn check_verification_code(&self, _code: &str) -> Result<(), ApiError> {
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeStoryRepository {
    pub stories: Vec<Story>,
    pub fail: bool,
}

#[async_trait]
impl StoryRepository for FakeStoryRepository {
    async fn fetch_stories(&self) -> Result<Vec<Story>, ApiError> {
        if self.fail {
            return Err(server_error());
        }
        Ok(self.stories.clone())
    }
}
