//! Device-local persistence.
//!
//! Everything the client keeps between launches (blocked users, auth tokens,
//! recent search keywords) goes through the [`KeyValueStore`] trait so that
//! tests can swap the on-disk store for [`MemoryKeyValueStore`].

mod block_list;
mod error;
mod file;
mod kv;
mod memory;
mod recent_keywords;
mod tokens;

pub use block_list::BlockList;
pub use error::StorageError;
pub use file::FileKeyValueStore;
pub use kv::{KeyValueStore, KeyValueStoreExt};
pub use memory::MemoryKeyValueStore;
pub use recent_keywords::RecentKeywords;
pub use tokens::{TokenKind, TokenStore};
