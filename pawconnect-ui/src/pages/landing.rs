//! Landing Page
//!
//! Marketing page: hero, city picker, feature voting, testimonials and
//! counters, the waitlist form and a closing call to action.

use leptos::*;
use pawconnect::landing::city_section_heading;

use crate::components::{CallToAction, CitySelector, FeatureVoting, FeedbackSection, Hero, SocialProof};
use crate::state::global::GlobalState;

#[component]
pub fn Landing() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;

    view! {
        <div>
            <Hero />

            <section class="py-16 px-4">
                <div class="container mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-10">
                        {move || city_section_heading(city.get())}
                    </h2>
                    <CitySelector />
                </div>
            </section>

            <FeatureVoting />
            <SocialProof />
            <FeedbackSection />
            <CallToAction />
        </div>
    }
}
