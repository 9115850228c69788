//! Navigation Component
//!
//! Header with brand, primary links, search and notification buttons, the
//! user menu, and a collapsible menu for small screens.

use leptos::*;
use leptos_router::*;

use crate::components::icons::{BellIcon, HomeIcon, SearchIcon, UsersIcon};
use crate::components::user_menu::UserMenu;
use crate::state::{NavItem, NavModel, DEMO_USER};

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let nav = create_rw_signal(NavModel::for_path(&location.pathname.get_untracked()));

    view! {
        <div class="mx-4 sm:mx-6 mt-2 font-sans">
            <header class="relative">
                <div class="bg-primary border border-gray-800 rounded-2xl shadow-2xl p-4 text-white">
                    <div class="flex flex-wrap items-center justify-between gap-4">
                        <div class="flex items-center space-x-2 sm:space-x-8">
                            <Brand />

                            <nav class="hidden lg:flex space-x-1">
                                {NavItem::ALL
                                    .into_iter()
                                    .map(|item| view! { <DesktopLink item=item nav=nav /> })
                                    .collect_view()}
                            </nav>

                            <MenuButton nav=nav />
                        </div>

                        // Search, notifications and profile
                        <div class="flex items-center space-x-2 sm:space-x-4">
                            <button class="sm:hidden p-2 rounded-xl bg-gray-900 border border-gray-700 \
                                           hover:bg-gray-800 transition-all duration-300">
                                <SearchIcon class="h-5 w-5 text-gray-400" />
                            </button>

                            <button class="relative p-2 rounded-xl bg-gray-900 border border-gray-700 \
                                           hover:bg-gray-800 transition-all duration-300 group">
                                <BellIcon class="h-5 w-5 text-gray-400 group-hover:text-white transition-colors" />
                            </button>

                            <UserMenu user=DEMO_USER />
                        </div>
                    </div>

                    {move || {
                        nav.with(|m| m.mobile_menu_open).then(|| view! {
                            <div class="lg:hidden mt-4 pt-4 border-t border-gray-800">
                                <nav class="grid grid-cols-2 gap-2">
                                    {NavItem::ALL
                                        .into_iter()
                                        .map(|item| view! { <MobileLink item=item nav=nav /> })
                                        .collect_view()}
                                </nav>
                            </div>
                        })
                    }}
                </div>
            </header>
        </div>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <A href="/" class="flex items-center gap-1">
            <span class="w-[44px] h-[44px] rounded-xl bg-gray-900 border border-gray-700 flex \
                         items-center justify-center text-lg font-bold">
                "P"
            </span>
            <h2 class="font-bold text-2xl">"Payra Pay"</h2>
        </A>
    }
}

/// Hamburger toggle, three bars that fold into a cross while open
#[component]
fn MenuButton(nav: RwSignal<NavModel>) -> impl IntoView {
    let open = move || nav.with(|m| m.mobile_menu_open);

    view! {
        <button
            class="lg:hidden p-2 rounded-xl bg-gray-900 border border-gray-700 hover:bg-gray-800 \
                   transition-all duration-300"
            on:click=move |_| nav.update(|m| m.toggle_mobile_menu())
        >
            <div class="w-5 h-5 flex flex-col justify-center items-center">
                <div class=move || bar_class("", "rotate-45 translate-y-0.5", open())></div>
                <div class=move || bar_class("mt-1", "opacity-0", open())></div>
                <div class=move || bar_class("mt-1", "-rotate-45 -translate-y-1.5", open())></div>
            </div>
        </button>
    }
}

#[component]
fn DesktopLink(item: NavItem, nav: RwSignal<NavModel>) -> impl IntoView {
    view! {
        <A href=item.path()>
            <button
                class=move || tab_class(nav.with(|m| m.is_active(item)), false)
                on:click=move |_| nav.update(|m| m.select(item))
            >
                <NavIcon item=item />
                <span class="font-medium">{item.label()}</span>
            </button>
        </A>
    }
}

#[component]
fn MobileLink(item: NavItem, nav: RwSignal<NavModel>) -> impl IntoView {
    view! {
        <A href=item.path()>
            <button
                class=move || tab_class(nav.with(|m| m.is_active(item)), true)
                on:click=move |_| nav.update(|m| m.select_from_mobile(item))
            >
                <NavIcon item=item />
                <span class="font-medium">{item.label()}</span>
            </button>
        </A>
    }
}

#[component]
fn NavIcon(item: NavItem) -> impl IntoView {
    match item {
        NavItem::Dashboard => view! { <HomeIcon /> }.into_view(),
        NavItem::Login | NavItem::SignUp => view! { <UsersIcon /> }.into_view(),
    }
}

fn tab_class(active: bool, mobile: bool) -> &'static str {
    match (mobile, active) {
        (false, true) => {
            "flex items-center space-x-2 px-4 py-2 rounded-xl transition-all duration-300 \
             bg-gray-800 text-white"
        }
        (false, false) => {
            "flex items-center space-x-2 px-4 py-2 rounded-xl transition-all duration-300 \
             hover:text-white hover:bg-gray-900"
        }
        (true, true) => {
            "flex items-center space-x-2 px-3 py-2 rounded-xl transition-all duration-300 \
             bg-gray-800 text-white"
        }
        (true, false) => {
            "flex items-center space-x-2 px-3 py-2 rounded-xl transition-all duration-300 \
             text-gray-400 hover:text-white hover:bg-gray-900"
        }
    }
}

fn bar_class(spacing: &str, open_transform: &str, open: bool) -> String {
    let transform = if open { open_transform } else { "" };
    format!("w-4 h-0.5 bg-white transition-all duration-300 {} {}", spacing, transform)
        .trim_end()
        .to_string()
}
