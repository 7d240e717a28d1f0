//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, InlineLoading, Toast};
use crate::pages::{Directory, Home, InfoHub, Landing, Profile};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    state.refresh_dataset();

    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <Header />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/home" view=Home />
                        <Route path="/profile" view=Profile />
                        <Route path="/directory" view=Directory />
                        <Route path="/infohub" view=InfoHub />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Site footer with quick links
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let loading = state.loading;
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer class="bg-gray-900 text-gray-300 py-10 px-4">
            <div class="container mx-auto grid gap-8 md:grid-cols-3 text-sm">
                <div>
                    <div class="flex items-center space-x-2 mb-3">
                        <span class="text-2xl">"🐾"</span>
                        <span class="text-lg font-bold text-white">"PawConnect"</span>
                    </div>
                    <p class="text-gray-400">
                        {move || format!(
                            "Your local pet community in {}.",
                            city.get().map(|c| c.display_name()).unwrap_or("your city")
                        )}
                    </p>
                </div>

                <div>
                    <h3 class="text-white font-semibold mb-3">"Explore"</h3>
                    <ul class="space-y-2">
                        <li><A href="/directory" class="hover:text-white">"Service Directory"</A></li>
                        <li><A href="/infohub" class="hover:text-white">"Info Hub"</A></li>
                        <li><A href="/profile" class="hover:text-white">"Your Profile"</A></li>
                    </ul>
                </div>

                <div>
                    <h3 class="text-white font-semibold mb-3">"Cities"</h3>
                    <p class="text-gray-400">"Amsterdam · Dublin · Calgary"</p>
                </div>
            </div>

            <div class="container mx-auto mt-8 pt-6 border-t border-gray-800 flex items-center justify-between text-xs text-gray-500">
                <span>{format!("© {} PawConnect. All rights reserved.", year)}</span>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2">
                                <InlineLoading />
                                <span>"Syncing..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    web_sys::console::error_1(
        &format!("404 Error: User attempted to access non-existent route: {}", path).into(),
    );

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <div class="text-6xl mb-4">"🐾"</div>
            <h1 class="text-4xl font-bold mb-2">"404"</h1>
            <p class="text-xl text-gray-500 mb-6 max-w-md">
                "Oops! We couldn't find this page. It seems this paw print led to a dead end."
            </p>
            <A
                href="/"
                class="px-6 py-3 bg-primary hover:bg-primary/90 text-white rounded-lg font-medium transition-colors"
            >
                "Return to Home"
            </A>
        </div>
    }
}
