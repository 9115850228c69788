//! 404 Not Found page

use leptos::*;
use leptos_router::*;

use crate::routes::AppRoute;

/// Rendered for any path outside the route table
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-950 text-white flex flex-col items-center justify-center text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=AppRoute::Home.path()
                class="px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-xl font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
