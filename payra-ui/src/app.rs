//! App Root Component
//!
//! Router and route tree. Dashboard, login and sign up render inside the
//! `/` layout; the index child shows the dashboard.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Home, Login, NotFound, Signup};
use crate::routes::AppRoute;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path=AppRoute::Home.path() view=Home>
                    <Route path=AppRoute::Home.segment() view=Dashboard />
                    <Route path=AppRoute::Dashboard.segment() view=Dashboard />
                    <Route path=AppRoute::Login.segment() view=Login />
                    <Route path=AppRoute::Signup.segment() view=Signup />
                </Route>
                <Route path="/*any" view=NotFound />
            </Routes>
            <DocumentTitle />
        </Router>
    }
}

/// Keeps the tab title in sync with the current route
#[component]
fn DocumentTitle() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        let title = AppRoute::from_path(&location.pathname.get())
            .map(|route| format!("{} | Payra Pay", route.title()))
            .unwrap_or_else(|| "Not Found | Payra Pay".to_string());

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });
}
