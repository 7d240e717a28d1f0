//! Home Page
//!
//! City-aware start page. Without a city it shows only the picker; after a
//! pick the page appears once the reveal delay has passed.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;
use pawconnect::city::City;
use pawconnect::landing::{city_section_heading, CITY_REVEAL_DELAY_MS, HOME_HIGHLIGHTS};

use crate::components::{CitySelector, FeedbackSection, Loading};
use crate::state::global::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;

    let revealed = create_rw_signal(city.get_untracked().is_some());
    let on_first_pick = Callback::new(move |picked: City| {
        tracing::debug!(city = %picked, "Revealing home page");
        Timeout::new(CITY_REVEAL_DELAY_MS, move || revealed.set(true)).forget();
    });

    view! {
        {move || match (city.get(), revealed.get()) {
            (None, _) => view! {
                <section class="py-16 px-4">
                    <div class="container mx-auto">
                        <h1 class="text-3xl font-bold text-center mb-2">"Welcome to PawConnect"</h1>
                        <p class="text-center text-gray-600 mb-10">{city_section_heading(None)}</p>
                        <CitySelector on_select=on_first_pick />
                    </div>
                </section>
            }.into_view(),
            (Some(_), false) => view! { <Loading message="Setting up your city..." /> }.into_view(),
            (Some(selected), true) => view! { <CityHome city=selected /> }.into_view(),
        }}
    }
}

#[component]
fn CityHome(city: City) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let profile = state.dataset.with_untracked(|d| d.city_profile(city).cloned());
    let (image_failed, set_image_failed) = create_signal(false);

    view! {
        <div>
            {profile.map(|profile| {
                let image = profile.image.clone();
                view! {
                    <section class="bg-white">
                        <div class="container mx-auto px-4 py-12 grid gap-8 md:grid-cols-2 items-center">
                            <div>
                                <h1 class=move || format!("text-4xl font-bold mb-2 {}", theme.get().tokens.text)>
                                    {format!("Welcome to PawConnect {}", profile.title)}
                                </h1>
                                <p class="text-gray-500 mb-4">{profile.subtitle.clone()}</p>
                                <p class="text-gray-700 mb-6">{profile.description.clone()}</p>
                                <ul class="space-y-2">
                                    {profile.features.iter().map(|feature| view! {
                                        <li class="flex items-center space-x-2">
                                            <span class=move || theme.get().tokens.text>"✓"</span>
                                            <span>{feature.clone()}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                            <Show when=move || !image_failed.get()>
                                <img
                                    src=image.clone()
                                    alt="City"
                                    class="w-full h-72 object-cover rounded-xl"
                                    on:error=move |_| set_image_failed.set(true)
                                />
                            </Show>
                        </div>
                    </section>
                }
            })}

            <section class="py-12 px-4">
                <div class="container mx-auto grid gap-6 md:grid-cols-3">
                    {HOME_HIGHLIGHTS.into_iter().map(|highlight| view! {
                        <A href=highlight.link class="block bg-white rounded-xl shadow-sm p-6 hover:shadow-md transition-shadow">
                            <div class=move || format!(
                                "w-12 h-12 rounded-full flex items-center justify-center text-2xl mb-4 {}",
                                theme.get().tokens.light_bg
                            )>
                                {highlight.icon}
                            </div>
                            <h3 class="text-lg font-semibold mb-2">{highlight.title}</h3>
                            <p class="text-sm text-gray-600">{highlight.description}</p>
                        </A>
                    }).collect_view()}
                </div>
            </section>

            <FeedbackSection
                title=format!("Help Shape PawConnect {}", city.display_name())
                subtitle="Tell us what would make pet life in your city easier"
            />

            <section class="py-12 px-4 bg-gray-100">
                <div class="container mx-auto">
                    <h2 class="text-2xl font-bold text-center mb-8">{city_section_heading(Some(city))}</h2>
                    <CitySelector />
                </div>
            </section>
        </div>
    }
}
