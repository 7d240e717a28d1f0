//! Global Application State
//!
//! Reactive state management using Leptos signals. The selected city is the
//! only state that outlives a page load; it is written to local storage
//! through [`BrowserStore`].

use leptos::*;
use pawconnect::city::{City, CitySelection, SelectionStore};
use pawconnect::dataset::Dataset;
use pawconnect::theme::{theme_for, Theme};

use crate::api;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Selected city, `None` until the visitor picks one
    pub city: RwSignal<Option<City>>,
    /// Theme derived from `city`
    pub theme: Memo<&'static Theme>,
    /// Content every page renders from
    pub dataset: RwSignal<Dataset>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    selection: StoredValue<CitySelection<BrowserStore>>,
}

/// [`SelectionStore`] over `window.localStorage`
///
/// Storage failures (private mode, quota) are logged and otherwise ignored;
/// the selection still works for the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl SelectionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!(key, "Could not write to local storage");
                }
            }
            None => tracing::warn!("Local storage unavailable"),
        }
    }

    fn remove(&mut self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    tracing::warn!(key, "Could not remove from local storage");
                }
            }
            None => tracing::warn!("Local storage unavailable"),
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let selection = CitySelection::restore(BrowserStore);
    let city = create_rw_signal(selection.current());

    let dataset = match Dataset::bundled() {
        Ok(dataset) => dataset,
        Err(e) => {
            web_sys::console::error_1(&format!("Bundled dataset unreadable: {}", e).into());
            Dataset::default()
        }
    };

    let state = GlobalState {
        city,
        theme: create_memo(move |_| theme_for(city.get())),
        dataset: create_rw_signal(dataset),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        selection: store_value(selection),
    };

    provide_context(state);
}

impl GlobalState {
    /// Select a city and persist it
    pub fn select_city(&self, city: City) {
        self.selection.update_value(|selection| {
            selection.select(city);
        });
        self.city.set(Some(city));
    }

    /// Replace the bundled dataset with the server's copy, if one answers
    pub fn refresh_dataset(&self) {
        let state = self.clone();
        state.loading.set(true);

        spawn_local(async move {
            match api::fetch_dataset().await {
                Ok(dataset) => {
                    tracing::info!(providers = dataset.providers.len(), "Dataset loaded from server");
                    state.dataset.set(dataset);
                }
                // Expected when the UI is served without the API
                Err(e) => tracing::debug!("Using bundled dataset: {}", e),
            }
            state.loading.set(false);
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawconnect::city::CITY_STORAGE_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_store_round_trip() {
        let mut store = BrowserStore;
        store.set(CITY_STORAGE_KEY, "dublin");
        assert_eq!(store.get(CITY_STORAGE_KEY).as_deref(), Some("dublin"));

        store.remove(CITY_STORAGE_KEY);
        assert_eq!(store.get(CITY_STORAGE_KEY), None);
    }

    #[wasm_bindgen_test]
    fn test_browser_store_clear_twice() {
        let mut selection = CitySelection::restore(BrowserStore);
        selection.select(City::Dublin);
        selection.clear();
        selection.clear();

        assert_eq!(selection.current(), None);
        assert_eq!(BrowserStore.get(CITY_STORAGE_KEY), None);
    }

    #[wasm_bindgen_test]
    fn test_selection_restores_from_local_storage() {
        let mut selection = CitySelection::restore(BrowserStore);
        selection.select(City::Calgary);

        let reloaded = CitySelection::restore(BrowserStore);
        assert_eq!(reloaded.current(), Some(City::Calgary));

        let mut store = reloaded.into_store();
        store.remove(CITY_STORAGE_KEY);
    }
}
