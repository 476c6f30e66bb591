//! Endpoints of the EveryTip API.

use serde_json::{json, Value};

use super::target::{HttpMethod, Target};
use crate::domain::SortOption;

fn json_content_type() -> Vec<(&'static str, String)> {
    vec![("Content-Type", "application/json".to_string())]
}

#[derive(Debug, Clone)]
pub enum AuthTarget {
    GetAgreements,
    PostUserLogin { email: String, password: String },
    PostVerificationCode { email: String },
    GetCheckVerificationCode { code: String },
}

impl Target for AuthTarget {
    fn method(&self) -> HttpMethod {
        match self {
            AuthTarget::GetAgreements => HttpMethod::Get,
            AuthTarget::PostUserLogin { .. } => HttpMethod::Post,
            AuthTarget::PostVerificationCode { .. } => HttpMethod::Post,
            AuthTarget::GetCheckVerificationCode { .. } => HttpMethod::Get,
        }
    }

    fn path(&self) -> String {
        match self {
            AuthTarget::GetAgreements => "/auth/agreements",
            AuthTarget::PostUserLogin { .. } => "/auth/sign-in",
            AuthTarget::PostVerificationCode { .. } => "/auth/verification/email",
            AuthTarget::GetCheckVerificationCode { .. } => "/auth/verification",
        }
        .to_string()
    }

    fn parameters(&self) -> Option<Value> {
        match self {
            AuthTarget::GetAgreements => None,
            AuthTarget::PostUserLogin { email, password } => {
                Some(json!({ "email": email, "password": password }))
            }
            AuthTarget::PostVerificationCode { email } => Some(json!({ "email": email })),
            AuthTarget::GetCheckVerificationCode { code } => Some(json!({ "code": code })),
        }
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            AuthTarget::PostUserLogin { .. } | AuthTarget::PostVerificationCode { .. } => {
                json_content_type()
            }
            AuthTarget::GetAgreements | AuthTarget::GetCheckVerificationCode { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TipTarget {
    GetTips { sort: SortOption },
    GetUserTips { user_id: i64 },
    SearchTips { keyword: String, sort: SortOption },
}

impl Target for TipTarget {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        match self {
            TipTarget::GetTips { .. } => "/tips".to_string(),
            TipTarget::GetUserTips { user_id } => format!("/users/{}/tips", user_id),
            TipTarget::SearchTips { .. } => "/tips/search".to_string(),
        }
    }

    fn parameters(&self) -> Option<Value> {
        match self {
            TipTarget::GetTips { sort } => Some(json!({ "sort": sort.as_query() })),
            TipTarget::GetUserTips { .. } => None,
            TipTarget::SearchTips { keyword, sort } => {
                Some(json!({ "keyword": keyword, "sort": sort.as_query() }))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum UserTarget {
    GetMyProfile,
    GetUserProfile { user_id: i64 },
    PostToggleSubscription { user_id: i64 },
    PostReportUser { user_id: i64 },
}

impl Target for UserTarget {
    fn method(&self) -> HttpMethod {
        match self {
            UserTarget::GetMyProfile | UserTarget::GetUserProfile { .. } => HttpMethod::Get,
            UserTarget::PostToggleSubscription { .. } | UserTarget::PostReportUser { .. } => {
                HttpMethod::Post
            }
        }
    }

    fn path(&self) -> String {
        match self {
            UserTarget::GetMyProfile => "/users/me".to_string(),
            UserTarget::GetUserProfile { user_id } => format!("/users/{}", user_id),
            UserTarget::PostToggleSubscription { user_id } => {
                format!("/users/{}/subscription", user_id)
            }
            UserTarget::PostReportUser { user_id } => format!("/users/{}/report", user_id),
        }
    }
}

#[derive(Debug, Clone)]
pub enum StoryTarget {
    GetStories,
}

impl Target for StoryTarget {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        match self {
            StoryTarget::GetStories => "/stories".to_string(),
        }
    }
}
