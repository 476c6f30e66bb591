use crate::config::SecureString;

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub nick_name: String,
    pub access_token: SecureString,
    pub refresh_token: SecureString,
}
