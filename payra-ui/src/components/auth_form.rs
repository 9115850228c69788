//! Auth Form Frame
//!
//! Card and input rows shared by the login and sign up pages.

use leptos::*;

/// Centered card around a form that never leaves the page
#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto bg-gray-900 border border-gray-800 rounded-2xl p-8">
            <h1 class="text-2xl font-bold">{title}</h1>
            <p class="text-gray-400 mt-1 mb-6">{subtitle}</p>
            <form class="space-y-4" on:submit=|ev| ev.prevent_default()>
                {children()}
            </form>
        </div>
    }
}

#[component]
pub fn Field(
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm text-gray-300">{label}</span>
            <input
                type=kind
                placeholder=placeholder
                class="mt-1 w-full px-3 py-2 rounded-xl bg-black border border-gray-700 \
                       focus:outline-none focus:border-gray-500"
            />
        </label>
    }
}
