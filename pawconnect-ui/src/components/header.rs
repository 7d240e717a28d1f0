//! Header Component
//!
//! Top bar with logo, navigation links, the city badge and a mobile menu.

use leptos::*;
use leptos_router::*;

use super::CityBadge;
use crate::state::global::GlobalState;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/home", "Home"),
    ("/directory", "Directory"),
    ("/infohub", "Info Hub"),
    ("/profile", "Profile"),
];

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🐾"</span>
                        <span class=move || format!("text-xl font-bold {}", theme.get().tokens.text)>
                            "PawConnect"
                        </span>
                    </A>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center space-x-1">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| view! { <NavLink href=href label=label /> })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center space-x-3">
                        <CityBadge />

                        // Mobile menu toggle
                        <button
                            class="md:hidden p-2 rounded-lg hover:bg-gray-100"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                // Mobile navigation
                <Show when=move || menu_open.get()>
                    <nav
                        class="md:hidden flex flex-col pb-4 space-y-1"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| view! {
                                <A
                                    href=href
                                    class="px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
                                    active_class="bg-gray-100 font-semibold"
                                >
                                    {label}
                                </A>
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900 font-semibold"
        >
            {label}
        </A>
    }
}
