use std::sync::Arc;

use super::error::StorageError;
use super::kv::{KeyValueStore, KeyValueStoreExt};
use crate::config::SecureString;
use crate::domain::Account;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Storage key. Once published, do not rename.
    fn key(&self) -> &'static str {
        match self {
            Self::Access => "accessToken",
            Self::Refresh => "refreshToken",
        }
    }
}

/// Persisted auth tokens. "Logged in" means an access token is stored.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn token(&self, kind: TokenKind) -> Option<SecureString> {
        match self.storage.get_string(kind.key()) {
            Ok(Some(token)) if !token.is_empty() => Some(SecureString::new(token)),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(error = %err, ?kind, "Failed to read token");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token(TokenKind::Access).is_some()
    }

    pub fn save(&self, kind: TokenKind, token: &SecureString) -> Result<(), StorageError> {
        self.storage.set_as(kind.key(), token.expose())
    }

    /// Persist both tokens of a freshly signed-in account.
    pub fn save_account(&self, account: &Account) -> Result<(), StorageError> {
        self.save(TokenKind::Access, &account.access_token)?;
        self.save(TokenKind::Refresh, &account.refresh_token)
    }

    pub fn delete(&self, kind: TokenKind) -> Result<(), StorageError> {
        self.storage.remove(kind.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;

    fn store() -> TokenStore {
        TokenStore::new(Arc::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn logged_out_by_default() {
        assert!(!store().is_logged_in());
    }

    #[test]
    fn save_account_logs_in() {
        let tokens = store();
        let account = Account {
            id: 1,
            email: "tip@everytip.app".to_string(),
            nick_name: "tipper".to_string(),
            access_token: SecureString::new("access".to_string()),
            refresh_token: SecureString::new("refresh".to_string()),
        };
        tokens.save_account(&account).unwrap();

        assert!(tokens.is_logged_in());
        assert_eq!(tokens.token(TokenKind::Refresh).unwrap().expose(), "refresh");
    }

    #[test]
    fn deleting_access_token_logs_out() {
        let tokens = store();
        tokens
            .save(TokenKind::Access, &SecureString::new("a".to_string()))
            .unwrap();
        tokens.delete(TokenKind::Access).unwrap();
        assert!(!tokens.is_logged_in());
    }

    #[test]
    fn empty_token_is_not_logged_in() {
        let tokens = store();
        tokens
            .save(TokenKind::Access, &SecureString::new(String::new()))
            .unwrap();
        assert!(!tokens.is_logged_in());
    }
}
