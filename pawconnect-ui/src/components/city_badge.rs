//! City Badge Component

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Pill showing the selected city, linking to the city picker
#[component]
pub fn CityBadge() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let theme = state.theme;

    view! {
        <A href="/home">
            <span class=move || format!(
                "inline-flex items-center space-x-1 px-3 py-1 rounded-full text-sm font-medium {} {}",
                theme.get().tokens.light_bg,
                theme.get().tokens.text,
            )>
                <span>"📍"</span>
                <span>{move || city.get().map(|c| c.display_name()).unwrap_or("Select city")}</span>
            </span>
        </A>
    }
}
