use crate::domain::MyProfile;
use crate::ui::mvi::{Pulse, UiState};

/// Rows of the settings menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    SetSubscribe,
    SetCategories,
    Agreement,
    Version(String),
    Login,
    Logout,
}

impl MenuItem {
    pub fn title(&self) -> &'static str {
        match self {
            MenuItem::SetSubscribe => "Subscriptions",
            MenuItem::SetCategories => "Interests",
            MenuItem::Agreement => "Terms of service",
            MenuItem::Version(_) => "Version",
            MenuItem::Login => "Log in",
            MenuItem::Logout => "Log out",
        }
    }

    /// Menu for the given login state; exactly one of login / logout is shown.
    pub fn menu(logged_in: bool, version: &str) -> Vec<MenuItem> {
        vec![
            MenuItem::SetSubscribe,
            MenuItem::SetCategories,
            MenuItem::Agreement,
            MenuItem::Version(version.to_string()),
            if logged_in {
                MenuItem::Logout
            } else {
                MenuItem::Login
            },
        ]
    }
}

/// Where the coordinator should take the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MyInfoNavigation {
    Agreement,
    /// Ask for logout confirmation.
    Logout,
    EditProfile,
    SetCategories,
    SetSubscribe,
    Login,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MyInfoState {
    pub my_profile: MyProfile,
    pub items: Vec<MenuItem>,
    pub is_loading: bool,
    pub toast: Pulse<String>,
    pub navigation: Pulse<MyInfoNavigation>,
    pub logout_confirmed: Pulse<()>,
}

impl Default for MyInfoState {
    fn default() -> Self {
        Self {
            my_profile: MyProfile::guest(),
            items: Vec::new(),
            is_loading: false,
            toast: Pulse::new(),
            navigation: Pulse::new(),
            logout_confirmed: Pulse::new(),
        }
    }
}

impl UiState for MyInfoState {}
