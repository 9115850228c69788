//! User Menu Component
//!
//! Profile trigger with a hover-intent dropdown. A document-wide mousedown
//! listener closes the panel when the press lands outside of it; both the
//! listener and any pending close are released on unmount.

use leptos::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::components::avatar::Avatar;
use crate::components::icons::ChevronDownIcon;
use crate::state::{BrowserTimer, DropdownMenu, UserProfile};

/// Avatar button and profile dropdown
#[component]
pub fn UserMenu(user: UserProfile) -> impl IntoView {
    let open = create_rw_signal(false);
    let menu = Rc::new(DropdownMenu::new(open, BrowserTimer));
    let container = create_node_ref::<html::Div>();

    let outside_click = {
        let menu = Rc::clone(&menu);
        window_event_listener(ev::mousedown, move |ev| {
            let Some(container) = container.get_untracked() else {
                return;
            };
            let inside = contains_target(&container, ev.target());

            if !inside && menu.is_open() {
                web_sys::console::debug_1(&"User menu dismissed by outside click".into());
            }
            menu.pointer_down(inside);
        })
    };

    {
        let menu = Rc::clone(&menu);
        on_cleanup(move || {
            menu.cancel_pending_close();
            outside_click.remove();
        });
    }

    let trigger_enter = Rc::clone(&menu);
    let trigger_leave = Rc::clone(&menu);
    let trigger_click = Rc::clone(&menu);
    let panel_menu = Rc::clone(&menu);

    view! {
        <div class="relative" node_ref=container>
            <div
                class="flex items-center space-x-1 sm:space-x-3 cursor-pointer hover:bg-gray-900 p-2 \
                       rounded-xl transition-all duration-300"
                on:mouseenter=move |_| trigger_enter.pointer_enter()
                on:mouseleave=move |_| trigger_leave.pointer_leave()
                on:click=move |_| trigger_click.toggle()
            >
                <Avatar user=user />
                <ChevronDownIcon open=open />
            </div>

            {move || {
                open.get().then(|| {
                    let enter = Rc::clone(&panel_menu);
                    let leave = Rc::clone(&panel_menu);
                    view! {
                        <div
                            class="absolute right-0 mt-2 w-64 bg-black border border-gray-800 rounded-xl \
                                   shadow-2xl py-2 z-50"
                            on:mouseenter=move |_| enter.pointer_enter()
                            on:mouseleave=move |_| leave.pointer_leave()
                        >
                            <ProfileSummary user=user />
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// Whether an event target is `container` or one of its descendants
fn contains_target(container: &web_sys::Node, target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

#[component]
fn ProfileSummary(user: UserProfile) -> impl IntoView {
    view! {
        <div class="px-4 py-3">
            <div class="flex items-center space-x-3">
                <Avatar user=user size="w-10 h-10" icon_class="h-6 w-6 text-white" />
                <div class="flex-1 min-w-0">
                    <p class="text-white font-medium truncate">{user.name()}</p>
                    <p class="text-gray-400 text-sm truncate">{user.email}</p>
                </div>
            </div>
        </div>
    }
}
