use std::cmp::Ordering;

use super::tip::Tip;

/// Ordering applied to tip listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    #[default]
    Latest,
    Views,
    Likes,
}

impl SortOption {
    /// Query value understood by the API.
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Views => "views",
            Self::Likes => "likes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "latest" => Some(Self::Latest),
            "views" => Some(Self::Views),
            "likes" => Some(Self::Likes),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Views => "Most viewed",
            Self::Likes => "Most liked",
        }
    }

    /// Descending comparison for this option.
    pub fn compare(&self, a: &Tip, b: &Tip) -> Ordering {
        match self {
            Self::Latest => b.created_at.cmp(&a.created_at),
            Self::Views => b.view_count.cmp(&a.view_count),
            Self::Likes => b.like_count.cmp(&a.like_count),
        }
    }

    /// Stable sort: tips that compare equal keep their relative order.
    pub fn sorted(&self, mut tips: Vec<Tip>) -> Vec<Tip> {
        tips.sort_by(|a, b| self.compare(a, b));
        tips
    }
}
