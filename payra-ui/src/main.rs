//! Payra Pay
//!
//! Client-side rendered Leptos front end, compiled to WebAssembly.
//!
//! # Layout
//!
//! - [`routes`]: route table shared by the router and the navigation header
//! - [`pages`]: the `/` layout and the pages rendered in its outlet
//! - [`components`]: navigation header, user menu, icons
//! - [`state`]: DOM-free UI state (nav model, hover-intent dropdown, timers)

use leptos::*;

mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&format!("Payra Pay v{}", env!("CARGO_PKG_VERSION")).into());

    mount_to_body(|| view! { <app::App /> });
}
