//! Login Page
//!
//! Presentational only; submitting does not authenticate.

use leptos::*;
use leptos_router::*;

use crate::components::auth_form::{AuthCard, Field};
use crate::routes::AppRoute;

/// Sign-in form
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <AuthCard title="Login" subtitle="Sign in to your Payra Pay account">
            <Field label="Email" kind="email" placeholder="you@example.com" />
            <Field label="Password" kind="password" placeholder="••••••••" />
            <button
                type="submit"
                class="w-full py-2 rounded-xl bg-gray-800 hover:bg-gray-700 font-medium transition-colors"
            >
                "Login"
            </button>
            <p class="text-sm text-gray-400 text-center">
                "No account yet? "
                <A href=AppRoute::Signup.path() class="text-white underline">"Sign up"</A>
            </p>
        </AuthCard>
    }
}
