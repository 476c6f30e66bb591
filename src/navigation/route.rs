use crate::domain::Tip;
use crate::ui::my_info::MyInfoNavigation;

/// Destinations reachable from the screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Explore,
    MyInfo,
    TipDetail { tip_id: i64 },
    UserProfile { user_id: i64 },
    Search,
    Login,
    Agreement,
    EditProfile,
    Categories,
    Subscriptions,
    BlockedList,
    PostTip,
}

impl Route {
    /// Routes shown modally on top of the current stack.
    pub fn is_modal(&self) -> bool {
        matches!(self, Route::Login | Route::PostTip)
    }

    /// Tab roots; pushing one resets the stack.
    pub fn is_tab(&self) -> bool {
        matches!(self, Route::Home | Route::Explore | Route::MyInfo)
    }

    /// Detail screen for a selected tip.
    pub fn tip_detail(tip: &Tip) -> Self {
        Route::TipDetail { tip_id: tip.id }
    }

    /// Profile of the tip's writer.
    pub fn writer_profile(tip: &Tip) -> Self {
        Route::UserProfile {
            user_id: tip.writer_id,
        }
    }
}

impl MyInfoNavigation {
    /// Route for this signal. `Logout` only asks for confirmation and stays on
    /// the current screen.
    pub fn route(self) -> Option<Route> {
        match self {
            MyInfoNavigation::Agreement => Some(Route::Agreement),
            MyInfoNavigation::Logout => None,
            MyInfoNavigation::EditProfile => Some(Route::EditProfile),
            MyInfoNavigation::SetCategories => Some(Route::Categories),
            MyInfoNavigation::SetSubscribe => Some(Route::Subscriptions),
            MyInfoNavigation::Login => Some(Route::Login),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn my_info_signals_map_to_routes() {
        assert_eq!(MyInfoNavigation::Login.route(), Some(Route::Login));
        assert_eq!(MyInfoNavigation::SetSubscribe.route(), Some(Route::Subscriptions));
        assert_eq!(MyInfoNavigation::Logout.route(), None);
    }

    #[test]
    fn tip_routes_use_ids() {
        let tip = Tip {
            id: 3,
            writer_id: 9,
            ..Tip::default()
        };
        assert_eq!(Route::tip_detail(&tip), Route::TipDetail { tip_id: 3 });
        assert_eq!(Route::writer_profile(&tip), Route::UserProfile { user_id: 9 });
    }

    #[test]
    fn modal_and_tab_routes() {
        assert!(Route::Login.is_modal());
        assert!(!Route::TipDetail { tip_id: 1 }.is_modal());
        assert!(Route::Explore.is_tab());
        assert!(!Route::Search.is_tab());
    }
}
