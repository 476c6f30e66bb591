/// Entry of the explore screen's story strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// `None` for the fixed "All tips" entry.
    pub user_id: Option<i64>,
    pub user_name: String,
    pub profile_image_url: Option<String>,
}

impl Story {
    pub const ALL_TIPS: &'static str = "All tips";

    /// The first entry, always present, which shows every writer's tips.
    pub fn all_tips() -> Self {
        Self {
            user_id: None,
            user_name: Self::ALL_TIPS.to_string(),
            profile_image_url: None,
        }
    }

    pub fn is_all_tips(&self) -> bool {
        self.user_id.is_none()
    }
}
