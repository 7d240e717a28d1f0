//! Profile Card Component

use leptos::*;
use pawconnect::dataset::User;
use pawconnect::profile::initials;

use crate::state::global::GlobalState;

/// Owner summary: avatar (initials when the image is missing), bio, pet count
#[component]
pub fn ProfileCard(user: User, #[prop(into)] pet_count: Signal<usize>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let (avatar_failed, set_avatar_failed) = create_signal(user.avatar.is_empty());

    let avatar = user.avatar.clone();
    let name = user.name.clone();
    let letters = initials(&user.name);

    view! {
        <div class="bg-white rounded-xl shadow-sm p-6 flex flex-col md:flex-row items-center md:items-start gap-6">
            {move || {
                if avatar_failed.get() {
                    view! {
                        <div class=move || format!(
                            "w-24 h-24 rounded-full flex items-center justify-center text-3xl font-bold text-white {}",
                            theme.get().tokens.bg
                        )>
                            {letters.clone()}
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <img
                            src=avatar.clone()
                            alt=name.clone()
                            class="w-24 h-24 rounded-full object-cover"
                            on:error=move |_| set_avatar_failed.set(true)
                        />
                    }.into_view()
                }
            }}

            <div class="flex-1 text-center md:text-left">
                <h2 class="text-2xl font-bold">{user.name.clone()}</h2>
                <p class="text-sm text-gray-500 mb-3">{format!("📍 {}", user.city.display_name())}</p>
                <p class="text-gray-700 mb-4">{user.bio.clone()}</p>
                <span class=move || format!(
                    "inline-block px-3 py-1 rounded-full text-sm {} {}",
                    theme.get().tokens.light_bg,
                    theme.get().tokens.text,
                )>
                    {move || match pet_count.get() {
                        1 => "1 pet".to_string(),
                        n => format!("{} pets", n),
                    }}
                </span>
            </div>
        </div>
    }
}
