//! Route Table
//!
//! Client-side routes. Every page except Not Found renders inside the
//! `/` layout, so child routes are declared by segment.

/// A page reachable through the client router
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Dashboard,
    Login,
    Signup,
}

impl AppRoute {
    pub const ALL: [AppRoute; 4] = [
        AppRoute::Home,
        AppRoute::Dashboard,
        AppRoute::Login,
        AppRoute::Signup,
    ];

    /// Absolute path used in links
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
        }
    }

    /// Path relative to the `/` layout, as declared on the nested route
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Document title for the page
    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Home | AppRoute::Dashboard => "Dashboard",
            AppRoute::Login => "Login",
            AppRoute::Signup => "Sign Up",
        }
    }

    /// Match a location pathname. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}
