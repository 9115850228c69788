//! Avatar Component

use leptos::*;

use crate::components::icons::UserIcon;
use crate::state::UserProfile;

/// Round profile picture, or a user icon when the profile has none
#[component]
pub fn Avatar(
    user: UserProfile,
    /// Tailwind size classes for the circle
    #[prop(default = "w-8 h-8")]
    size: &'static str,
    #[prop(default = "h-5 w-5 text-white")]
    icon_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} rounded-full overflow-hidden bg-gray-800 flex items-center justify-center \
             border border-gray-700",
            size
        )>
            {match user.avatar() {
                Some(url) => view! {
                    <img src=url alt="User avatar" class="w-full h-full object-cover" />
                }.into_view(),
                None => view! { <UserIcon class=icon_class /> }.into_view(),
            }}
        </div>
    }
}
