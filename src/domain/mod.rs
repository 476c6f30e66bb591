//! Domain models shared by the API layer and the screens.

mod account;
mod repository;
mod sort;
mod story;
mod tip;
mod user;

pub use account::Account;
pub use repository::{AuthRepository, StoryRepository, TipRepository, UserRepository};
pub use sort::SortOption;
pub use story::Story;
pub use tip::Tip;
pub use user::{MyProfile, UserProfile};
