//! Inline form error

use leptos::*;
use pawconnect::forms::ValidationErrors;

/// The message for `field`, if validation left one
#[component]
pub fn FieldMessage(errors: RwSignal<ValidationErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|message| view! { <p class="text-sm text-red-600 mt-1">{message}</p> })
    }
}
