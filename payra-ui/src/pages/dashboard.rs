//! Dashboard Page

use leptos::*;
use leptos_router::*;

use crate::routes::AppRoute;

/// Landing content for signed-in users
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Welcome back to Payra Pay"</p>
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                <SummaryCard title="Balance" detail="Your wallet overview will appear here." />
                <SummaryCard title="Payments" detail="Recent payments will be listed here." />
                <SummaryCard title="Requests" detail="Open payment requests show up here." />
            </div>

            <section class="bg-gray-900 border border-gray-800 rounded-2xl p-6">
                <h2 class="text-xl font-semibold mb-2">"Get started"</h2>
                <p class="text-gray-400 mb-4">"Create an account or sign in to continue."</p>
                <div class="flex gap-3">
                    <A
                        href=AppRoute::Signup.path()
                        class="px-4 py-2 rounded-xl bg-gray-800 hover:bg-gray-700 transition-colors"
                    >
                        "Sign Up"
                    </A>
                    <A
                        href=AppRoute::Login.path()
                        class="px-4 py-2 rounded-xl border border-gray-700 hover:bg-gray-900 transition-colors"
                    >
                        "Login"
                    </A>
                </div>
            </section>
        </div>
    }
}

#[component]
fn SummaryCard(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-900 border border-gray-800 rounded-2xl p-5">
            <h3 class="text-sm text-gray-400 uppercase tracking-wide">{title}</h3>
            <p class="mt-2 text-gray-300">{detail}</p>
        </div>
    }
}
