//! Icons
//!
//! Inline stroke icons (24x24 grid, lucide geometry).

use leptos::*;

#[component]
fn Stroke(class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn SearchIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <Stroke class=class>
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21-4.3-4.3" />
        </Stroke>
    }
}

#[component]
pub fn BellIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <Stroke class=class>
            <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
            <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
        </Stroke>
    }
}

/// Chevron that flips while `open` is set
#[component]
pub fn ChevronDownIcon(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=move || {
                if open.get() {
                    "h-4 w-4 text-gray-500 hidden sm:block transition-transform duration-300 rotate-180"
                } else {
                    "h-4 w-4 text-gray-500 hidden sm:block transition-transform duration-300"
                }
            }
        >
            <path d="m6 9 6 6 6-6" />
        </svg>
    }
}

#[component]
pub fn HomeIcon(#[prop(default = "h-[18px] w-[18px]")] class: &'static str) -> impl IntoView {
    view! {
        <Stroke class=class>
            <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
            <polyline points="9 22 9 12 15 12 15 22" />
        </Stroke>
    }
}

#[component]
pub fn UsersIcon(#[prop(default = "h-[18px] w-[18px]")] class: &'static str) -> impl IntoView {
    view! {
        <Stroke class=class>
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
            <path d="M16 3.13a4 4 0 0 1 0 7.75" />
        </Stroke>
    }
}

#[component]
pub fn UserIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <Stroke class=class>
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </Stroke>
    }
}
