//! City Selector Component
//!
//! One card per city profile. Picking a card stores the selection.

use leptos::*;
use pawconnect::city::City;
use pawconnect::dataset::CityProfile;
use pawconnect::theme::theme_for;

use crate::state::global::GlobalState;

/// Grid of city cards
#[component]
pub fn CitySelector(
    /// Runs after the selection has been stored
    #[prop(optional, into)]
    on_select: Option<Callback<City>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let cities = state.dataset;

    view! {
        <div class="grid gap-6 md:grid-cols-3">
            <For
                each=move || cities.with(|d| d.cities.clone())
                key=|profile| profile.id
                children=move |profile| {
                    let state = state.clone();
                    view! { <CityCard profile=profile state=state on_select=on_select /> }
                }
            />
        </div>
    }
}

#[component]
fn CityCard(
    profile: CityProfile,
    state: GlobalState,
    on_select: Option<Callback<City>>,
) -> impl IntoView {
    let city = profile.id;
    let tokens = theme_for(Some(city)).tokens;
    let selected = state.city;
    let (image_failed, set_image_failed) = create_signal(false);
    let image = profile.image.clone();
    let alt = profile.title.clone();

    let pick = move |_| {
        state.select_city(city);
        if let Some(callback) = on_select {
            callback.call(city);
        }
    };

    view! {
        <button
            on:click=pick
            class=move || format!(
                "text-left bg-white rounded-xl shadow-sm overflow-hidden border-2 transition-all hover:shadow-lg {}",
                if selected.get() == Some(city) { tokens.border } else { "border-transparent" }
            )
        >
            <Show when=move || !image_failed.get()>
                <img
                    src=image.clone()
                    alt=alt.clone()
                    class="w-full h-40 object-cover"
                    on:error=move |_| set_image_failed.set(true)
                />
            </Show>
            <div class="p-5">
                <div class="flex items-center justify-between mb-1">
                    <h3 class=format!("text-xl font-bold {}", tokens.text)>{profile.title.clone()}</h3>
                    {move || (selected.get() == Some(city)).then(|| view! {
                        <span class=format!("text-xs px-2 py-1 rounded-full text-white {}", tokens.bg)>
                            "Selected"
                        </span>
                    })}
                </div>
                <p class="text-sm text-gray-500 mb-3">{profile.subtitle.clone()}</p>
                <p class="text-sm text-gray-700 mb-3">{profile.description.clone()}</p>
                <ul class="space-y-1 text-sm text-gray-600">
                    {profile.features.iter().map(|feature| view! {
                        <li class="flex items-center space-x-2">
                            <span class=tokens.text>"✓"</span>
                            <span>{feature.clone()}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </button>
    }
}
