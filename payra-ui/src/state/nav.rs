//! Navigation State
//!
//! Active tab and mobile menu visibility for the navigation header.

use crate::routes::AppRoute;

/// Entry in the primary navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Login,
    SignUp,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Dashboard, NavItem::Login, NavItem::SignUp];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Login => "Login",
            NavItem::SignUp => "Sign Up",
        }
    }

    pub fn route(self) -> AppRoute {
        match self {
            NavItem::Dashboard => AppRoute::Dashboard,
            NavItem::Login => AppRoute::Login,
            NavItem::SignUp => AppRoute::Signup,
        }
    }

    pub fn path(self) -> &'static str {
        self.route().path()
    }

    /// Item highlighted for a route. The index page shows the dashboard.
    pub fn for_route(route: AppRoute) -> Self {
        match route {
            AppRoute::Home | AppRoute::Dashboard => NavItem::Dashboard,
            AppRoute::Login => NavItem::Login,
            AppRoute::Signup => NavItem::SignUp,
        }
    }
}

/// Local state of the navigation header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavModel {
    pub active_tab: NavItem,
    pub mobile_menu_open: bool,
}

impl Default for NavModel {
    fn default() -> Self {
        Self {
            active_tab: NavItem::Dashboard,
            mobile_menu_open: false,
        }
    }
}

impl NavModel {
    /// Initial state for the page being loaded
    pub fn for_path(path: &str) -> Self {
        let active_tab = AppRoute::from_path(path)
            .map(NavItem::for_route)
            .unwrap_or(NavItem::Dashboard);

        Self {
            active_tab,
            ..Self::default()
        }
    }

    pub fn is_active(&self, item: NavItem) -> bool {
        self.active_tab == item
    }

    /// Selection from the desktop bar
    pub fn select(&mut self, item: NavItem) {
        self.active_tab = item;
    }

    /// Selection from the mobile menu also closes the menu
    pub fn select_from_mobile(&mut self, item: NavItem) {
        self.active_tab = item;
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_dashboard() {
        let model = NavModel::default();
        assert!(model.is_active(NavItem::Dashboard));
        assert!(!model.mobile_menu_open);
    }

    #[test]
    fn test_select_sets_active() {
        let mut model = NavModel::default();
        for item in NavItem::ALL {
            model.select(item);
            assert_eq!(model.active_tab, item);
        }
    }

    #[test]
    fn test_mobile_select_closes_menu() {
        let mut model = NavModel::default();
        model.toggle_mobile_menu();
        assert!(model.mobile_menu_open);

        model.select_from_mobile(NavItem::SignUp);
        assert!(model.is_active(NavItem::SignUp));
        assert!(!model.mobile_menu_open);
    }

    #[test]
    fn test_desktop_select_leaves_mobile_menu() {
        let mut model = NavModel::default();
        model.toggle_mobile_menu();
        model.select(NavItem::Login);
        assert!(model.mobile_menu_open);
    }

    #[test]
    fn test_for_path() {
        assert_eq!(NavModel::for_path("/login").active_tab, NavItem::Login);
        assert_eq!(NavModel::for_path("/").active_tab, NavItem::Dashboard);
        assert_eq!(NavModel::for_path("/nowhere").active_tab, NavItem::Dashboard);
    }

    #[test]
    fn test_items_link_to_routes() {
        let paths: Vec<_> = NavItem::ALL.iter().map(|i| i.path()).collect();
        assert_eq!(paths, vec!["/dashboard", "/login", "/signup"]);
    }
}
