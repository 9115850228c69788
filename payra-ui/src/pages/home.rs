//! Home Layout
//!
//! Shared frame for every routed page: navigation header above the matched
//! child route.

use leptos::*;
use leptos_router::*;

use crate::components::Navbar;

/// Layout for `/` and its children
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-950 text-white">
            <Navbar />

            <main class="container mx-auto px-4 py-8">
                <Outlet />
            </main>
        </div>
    }
}
