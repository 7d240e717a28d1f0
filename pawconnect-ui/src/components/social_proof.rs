//! Social Proof Component
//!
//! Testimonial carousel and animated community counters. Both follow the
//! selected city and fall back to the generic set.

use leptos::*;
use pawconnect::landing::{
    animated_stats, counter_progress, stats_for, testimonial_byline, testimonials_for,
};
use leptos::leptos_dom::helpers::IntervalHandle;
use std::time::Duration;

use crate::state::global::GlobalState;

/// Counter repaint interval
const COUNTER_TICK_MS: u64 = 30;

#[component]
pub fn SocialProof() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let dataset = state.dataset;
    let theme = state.theme;

    let testimonials = create_memo(move |_| {
        dataset.with(|d| {
            testimonials_for(&d.testimonials, city.get())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let (index, set_index) = create_signal(0usize);

    // A new city brings a new set; start from its first entry
    create_effect(move |_| {
        let _ = city.get();
        set_index.set(0);
    });

    let step = move |delta: isize| {
        let len = testimonials.with_untracked(|t| t.len());
        if len > 0 {
            set_index.update(|i| *i = wrap_index(*i, delta, len));
        }
    };

    let target = create_memo(move |_| dataset.with(|d| stats_for(&d.stats, city.get())));
    let progress = create_rw_signal(0.0_f64);
    start_counter(progress);

    view! {
        <section class="py-16 px-4">
            <div class="container mx-auto max-w-5xl">
                <h2 class="text-3xl font-bold text-center mb-10">"What Pet Owners Are Saying"</h2>

                // Carousel
                {move || {
                    let list = testimonials.get();
                    let current = index.get().min(list.len().saturating_sub(1));
                    list.get(current).cloned().map(|t| view! {
                        <div class="bg-white rounded-xl shadow-sm p-8 text-center">
                            <img
                                src=t.avatar_url.clone()
                                alt=t.name.clone()
                                class="w-16 h-16 rounded-full object-cover mx-auto mb-4"
                            />
                            <div class="text-yellow-500 mb-3">{stars(t.rating)}</div>
                            <blockquote class="text-lg italic text-gray-700 mb-4">
                                {format!("\u{201c}{}\u{201d}", t.quote)}
                            </blockquote>
                            <p class="font-semibold">{t.name.clone()}</p>
                            <p class="text-sm text-gray-500">{testimonial_byline(&t)}</p>
                        </div>
                    })
                }}

                <div class="flex items-center justify-center space-x-4 mt-6">
                    <button
                        class="w-10 h-10 rounded-full border border-gray-300 hover:bg-gray-100"
                        aria-label="Previous testimonial"
                        on:click=move |_| step(-1)
                    >
                        "‹"
                    </button>
                    <div class="flex space-x-2">
                        {move || {
                            let len = testimonials.with(|t| t.len());
                            (0..len).map(|i| view! {
                                <button
                                    aria-label=format!("Testimonial {}", i + 1)
                                    on:click=move |_| set_index.set(i)
                                    class=move || {
                                        if index.get() == i {
                                            format!("w-3 h-3 rounded-full {}", theme.get().tokens.bg)
                                        } else {
                                            "w-3 h-3 rounded-full bg-gray-300".to_string()
                                        }
                                    }
                                />
                            }).collect_view()
                        }}
                    </div>
                    <button
                        class="w-10 h-10 rounded-full border border-gray-300 hover:bg-gray-100"
                        aria-label="Next testimonial"
                        on:click=move |_| step(1)
                    >
                        "›"
                    </button>
                </div>

                // Counters
                <div class="grid gap-6 md:grid-cols-3 mt-16 text-center">
                    {move || {
                        let shown = animated_stats(target.get(), progress.get());
                        let tokens = theme.get().tokens;
                        [
                            (shown.owners, "Pet Owners"),
                            (shown.businesses, "Local Businesses"),
                            (shown.features, "Features Requested"),
                        ]
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="bg-white rounded-xl shadow-sm p-6">
                                <div class=format!("text-4xl font-bold {}", tokens.text)>
                                    {format!("{}+", value)}
                                </div>
                                <div class="text-gray-600 mt-1">{label}</div>
                            </div>
                        })
                        .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

/// Drive `progress` from 0 to 1 over the counter animation
fn start_counter(progress: RwSignal<f64>) {
    let started = js_sys::Date::now();
    let handle_slot = store_value(None::<IntervalHandle>);

    let tick = move || {
        let p = counter_progress(js_sys::Date::now() - started);
        progress.set(p);
        if p >= 1.0 {
            if let Some(handle) = handle_slot.get_value() {
                handle.clear();
            }
        }
    };

    match set_interval_with_handle(tick, Duration::from_millis(COUNTER_TICK_MS)) {
        Ok(handle) => {
            handle_slot.set_value(Some(handle));
            on_cleanup(move || handle.clear());
        }
        Err(e) => {
            web_sys::console::error_1(&e);
            progress.set(1.0);
        }
    }
}

/// `i + delta` wrapped into `0..len`
fn wrap_index(i: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;
    ((i as isize + delta) % len + len) as usize % len as usize
}

/// Filled and empty stars for a 1-5 rating
fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(1, 1, 3), 2);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[wasm_bindgen_test]
    async fn test_counter_progresses_on_interval() {
        let progress = create_rw_signal(0.0);
        start_counter(progress);

        gloo_timers::future::TimeoutFuture::new(200).await;

        let p = progress.get_untracked();
        assert!(p > 0.0, "counter did not tick");
        assert!(p < 1.0);
    }
}
