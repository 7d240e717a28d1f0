//! Hero Component

use leptos::*;
use leptos_router::*;
use pawconnect::landing::{hero_image, hero_subtitle, HERO_TITLE};

use crate::state::global::GlobalState;

/// Landing banner; image and subtitle follow the selected city
#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let theme = state.theme;

    view! {
        <section class="relative overflow-hidden">
            <img
                src=move || hero_image(city.get())
                alt="Pets in the city"
                class="absolute inset-0 w-full h-full object-cover"
            />
            <div class="absolute inset-0 bg-black/50" />

            <div class="relative container mx-auto px-4 py-24 md:py-32 text-white">
                <h1 class="text-4xl md:text-5xl font-bold max-w-3xl mb-6">{HERO_TITLE}</h1>
                <p class="text-lg md:text-xl max-w-2xl mb-8 text-gray-100">
                    {move || hero_subtitle(city.get())}
                </p>
                <div class="flex flex-wrap gap-4">
                    <A href="/home">
                        <span class=move || format!(
                            "inline-block px-6 py-3 rounded-lg font-semibold {}",
                            theme.get().button_classes()
                        )>
                            "Explore Your City"
                        </span>
                    </A>
                    <a
                        href="#feedback"
                        class="px-6 py-3 rounded-lg font-semibold bg-white/10 hover:bg-white/20 border border-white"
                    >
                        "Join the Waitlist"
                    </a>
                </div>
            </div>
        </section>
    }
}
