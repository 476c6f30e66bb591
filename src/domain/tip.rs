/// A published tip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tip {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub writer_id: i64,
    pub writer_name: String,
    pub writer_profile_image_url: Option<String>,
    pub thumbnail_image_url: Option<String>,
    /// ISO-8601 timestamp as sent by the server; lexical order is
    /// chronological.
    pub created_at: String,
    pub view_count: u64,
    pub like_count: u64,
}
