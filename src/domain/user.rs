/// Another user's public profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub nick_name: String,
    pub profile_image_url: Option<String>,
    pub tip_count: u64,
    pub subscriber_count: u64,
    pub is_following: bool,
}

/// The signed-in user's own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyProfile {
    pub id: i64,
    pub status: i32,
    pub nick_name: String,
    pub profile_image_url: Option<String>,
    pub email: String,
    pub registered_date: String,
    pub tip_count: u64,
    pub saved_tip_count: u64,
    pub subscriber_count: u64,
}

impl MyProfile {
    /// Placeholder shown when nobody is signed in or the profile cannot be
    /// fetched.
    pub fn guest() -> Self {
        Self {
            id: 0,
            status: 0,
            nick_name: "Guest".to_string(),
            profile_image_url: None,
            email: "everytip".to_string(),
            registered_date: "00".to_string(),
            tip_count: 0,
            saved_tip_count: 0,
            subscriber_count: 0,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.id == 0
    }
}
