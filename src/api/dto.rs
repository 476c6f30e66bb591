//! Wire representations of API payloads.
//!
//! Every DTO maps onto its domain type through `into_domain()`; optional
//! wire fields fall back to empty values rather than failing the decode.

use serde::Deserialize;

use crate::config::SecureString;
use crate::domain::{Account, MyProfile, Story, Tip, UserProfile};

#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    pub id: i64,
    pub email: String,
    pub nick_name: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl AccountDto {
    pub fn into_domain(self) -> Account {
        Account {
            id: self.id,
            email: self.email,
            nick_name: self.nick_name,
            access_token: SecureString::new(self.access_token),
            refresh_token: SecureString::new(self.refresh_token),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriterDto {
    pub id: i64,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TipDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub writer: WriterDto,
    #[serde(default)]
    pub thumbnail_image_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
}

impl TipDto {
    pub fn into_domain(self) -> Tip {
        Tip {
            id: self.id,
            title: self.title,
            content: self.content,
            category_id: self.category_id,
            writer_id: self.writer.id,
            writer_name: self.writer.nick_name,
            writer_profile_image_url: self.writer.profile_image_url,
            thumbnail_image_url: self.thumbnail_image_url,
            created_at: self.created_at,
            view_count: self.view_count,
            like_count: self.like_count,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfileDto {
    pub id: i64,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub tip_count: u64,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl UserProfileDto {
    pub fn into_domain(self) -> UserProfile {
        UserProfile {
            id: self.id,
            nick_name: self.nick_name,
            profile_image_url: self.profile_image_url,
            tip_count: self.tip_count,
            subscriber_count: self.subscriber_count,
            is_following: self.is_subscribed,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyProfileDto {
    pub id: i64,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub registered_date: String,
    #[serde(default)]
    pub tip_count: u64,
    #[serde(default)]
    pub saved_tip_count: u64,
    #[serde(default)]
    pub subscriber_count: u64,
}

impl MyProfileDto {
    pub fn into_domain(self) -> MyProfile {
        MyProfile {
            id: self.id,
            status: self.status,
            nick_name: self.nick_name,
            profile_image_url: self.profile_image_url,
            email: self.email,
            registered_date: self.registered_date,
            tip_count: self.tip_count,
            saved_tip_count: self.saved_tip_count,
            subscriber_count: self.subscriber_count,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoryDto {
    pub user_id: i64,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl StoryDto {
    pub fn into_domain(self) -> Story {
        Story {
            user_id: Some(self.user_id),
            user_name: self.nick_name,
            profile_image_url: self.profile_image_url,
        }
    }
}
