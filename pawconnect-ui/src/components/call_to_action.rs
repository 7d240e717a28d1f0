//! Call To Action Component

use leptos::*;
use pawconnect::landing::{cta_heading, cta_image, early_access_message};

use crate::state::global::GlobalState;

/// Closing banner with the early access button
#[component]
pub fn CallToAction() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let theme = state.theme;

    let request_access = move |_| {
        state.show_success(&early_access_message(city.get_untracked()));
    };

    view! {
        <section class="relative overflow-hidden">
            <img
                src=move || cta_image(city.get())
                alt="City landmark"
                class="absolute inset-0 w-full h-full object-cover"
            />
            <div class=move || format!(
                "absolute inset-0 bg-gradient-to-r to-transparent opacity-90 {}",
                theme.get().tokens.gradient_from
            ) />

            <div class="relative container mx-auto px-4 py-20 text-white">
                <h2 class="text-3xl md:text-4xl font-bold mb-4 max-w-xl">
                    {move || cta_heading(city.get())}
                </h2>
                <p class="text-lg max-w-xl mb-8">
                    "Be among the first to connect with local pet owners and services when we launch."
                </p>
                <button
                    on:click=request_access
                    class="px-8 py-3 rounded-lg font-semibold bg-white text-gray-900 hover:bg-gray-100"
                >
                    "Get Early Access"
                </button>
            </div>
        </section>
    }
}
