//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Centered spinner with an optional caption
#[component]
pub fn Loading(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-gray-500">
            <div class="loading-spinner w-8 h-8" />
            {message.map(|m| view! { <p class="mt-3 text-sm">{m}</p> })}
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-3 h-3" />
    }
}
