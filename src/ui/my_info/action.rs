use super::state::{MenuItem, MyInfoNavigation};
use crate::domain::MyProfile;
use crate::ui::mvi::Action;

#[derive(Debug, Clone)]
pub enum MyInfoAction {
    Refresh,
    ApplyGuestProfile,
    AgreementCellTapped,
    LogoutCellTapped,
    LogoutConfirmTapped,
    EditProfileButtonTapped,
    SetCategoryButtonTapped,
    SetSubscribeButtonTapped,
    LoginCellTapped,
}

impl Action for MyInfoAction {}

#[derive(Debug, Clone)]
pub enum MyInfoMutation {
    SetLoading(bool),
    SetMyProfile(MyProfile),
    SetItems(Vec<MenuItem>),
    SetToast(String),
    SetNavigation(MyInfoNavigation),
    SetLogoutConfirmed,
}
