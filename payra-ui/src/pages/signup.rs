//! Sign Up Page

use leptos::*;
use leptos_router::*;

use crate::components::auth_form::{AuthCard, Field};
use crate::routes::AppRoute;

/// Registration form
#[component]
pub fn Signup() -> impl IntoView {
    view! {
        <AuthCard title="Sign Up" subtitle="Create your Payra Pay account">
            <Field label="Name" kind="text" placeholder="Your name" />
            <Field label="Email" kind="email" placeholder="you@example.com" />
            <Field label="Password" kind="password" placeholder="••••••••" />
            <button
                type="submit"
                class="w-full py-2 rounded-xl bg-gray-800 hover:bg-gray-700 font-medium transition-colors"
            >
                "Create account"
            </button>
            <p class="text-sm text-gray-400 text-center">
                "Already registered? "
                <A href=AppRoute::Login.path() class="text-white underline">"Login"</A>
            </p>
        </AuthCard>
    }
}
