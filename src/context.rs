//! Process-wide collaborators shared by every screen.

use std::sync::{Arc, OnceLock};

use crate::api::{
    HttpClient, RemoteAuthRepository, RemoteStoryRepository, RemoteTipRepository,
    RemoteUserRepository,
};
use crate::config::Config;
use crate::domain::{AuthRepository, StoryRepository, TipRepository, UserRepository};
use crate::error::AppError;
use crate::storage::{
    BlockList, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, RecentKeywords, TokenStore,
};
use crate::ui::blocked_list::BlockedListReactor;
use crate::ui::explore::ExploreReactor;
use crate::ui::home::HomeReactor;
use crate::ui::login::LoginReactor;
use crate::ui::my_info::MyInfoReactor;
use crate::ui::search::SearchReactor;
use crate::ui::story_cell::StoryCellReactor;
use crate::ui::user_profile::UserProfileReactor;

/// Storage, repositories and shared stores built once from [`Config`].
///
/// The block list is created on first access and shared afterwards.
pub struct AppContext {
    config: Config,
    storage: Arc<dyn KeyValueStore>,
    tokens: TokenStore,
    block_list: OnceLock<Arc<BlockList>>,
    tips: Arc<dyn TipRepository>,
    users: Arc<dyn UserRepository>,
    auth: Arc<dyn AuthRepository>,
    stories: Arc<dyn StoryRepository>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;

        let storage: Arc<dyn KeyValueStore> = if config.storage.in_memory {
            Arc::new(MemoryKeyValueStore::new())
        } else {
            let path = config
                .storage
                .path
                .clone()
                .unwrap_or_else(FileKeyValueStore::default_path);
            tracing::debug!(path = %path.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(path))
        };

        let tokens = TokenStore::new(Arc::clone(&storage));
        let client = HttpClient::new(&config.api, Some(tokens.clone()))?;

        Ok(Self::with_repositories(
            config,
            storage,
            Arc::new(RemoteTipRepository::new(client.clone())),
            Arc::new(RemoteUserRepository::new(client.clone())),
            Arc::new(RemoteAuthRepository::new(client.clone())),
            Arc::new(RemoteStoryRepository::new(client)),
        ))
    }

    /// Assemble a context from explicit parts, e.g. in-memory fakes.
    pub fn with_repositories(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
        tips: Arc<dyn TipRepository>,
        users: Arc<dyn UserRepository>,
        auth: Arc<dyn AuthRepository>,
        stories: Arc<dyn StoryRepository>,
    ) -> Self {
        Self {
            config,
            tokens: TokenStore::new(Arc::clone(&storage)),
            storage,
            block_list: OnceLock::new(),
            tips,
            users,
            auth,
            stories,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn block_list(&self) -> Arc<BlockList> {
        Arc::clone(
            self.block_list
                .get_or_init(|| Arc::new(BlockList::new(Arc::clone(&self.storage)))),
        )
    }

    pub fn recent_keywords(&self) -> RecentKeywords {
        RecentKeywords::new(Arc::clone(&self.storage))
    }

    pub fn home(&self) -> HomeReactor {
        HomeReactor::new(Arc::clone(&self.tips), self.block_list())
    }

    pub fn explore(&self) -> ExploreReactor {
        ExploreReactor::new(
            Arc::clone(&self.stories),
            Arc::clone(&self.tips),
            self.block_list(),
        )
    }

    pub fn user_profile(&self, user_id: i64) -> UserProfileReactor {
        UserProfileReactor::new(
            user_id,
            Arc::clone(&self.users),
            Arc::clone(&self.tips),
            self.block_list(),
        )
    }

    pub fn my_info(&self) -> MyInfoReactor {
        MyInfoReactor::new(
            Arc::clone(&self.users),
            self.tokens.clone(),
            self.config.app.version.clone(),
        )
    }

    pub fn search(&self) -> SearchReactor {
        SearchReactor::new(
            Arc::clone(&self.tips),
            self.block_list(),
            self.recent_keywords(),
        )
    }

    pub fn blocked_list(&self) -> BlockedListReactor {
        BlockedListReactor::new(self.block_list())
    }

    pub fn login(&self) -> LoginReactor {
        LoginReactor::new(Arc::clone(&self.auth), self.tokens.clone())
    }

    /// One entry of the explore story strip.
    pub fn story_cell(&self) -> StoryCellReactor {
        StoryCellReactor
    }
}
