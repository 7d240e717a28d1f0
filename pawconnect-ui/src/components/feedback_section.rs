//! Feedback Section Component
//!
//! Waitlist form shared by the landing and home pages. A valid submission
//! is held for [`ACK_DELAY_MS`], logged, then acknowledged with a banner
//! that stays up for [`SUCCESS_BANNER_MS`]. The banner takes the form's
//! place until then, so the two timers of one submission never overlap
//! with the next.

use leptos::*;
use pawconnect::forms::{
    FeedbackForm, SubmissionPhase, UseCase, ValidationErrors, ACK_DELAY_MS, PET_TYPES,
    SUCCESS_BANNER_MS,
};

use super::FieldMessage;
use crate::state::global::GlobalState;

#[component]
pub fn FeedbackSection(
    #[prop(default = "feedback")] anchor: &'static str,
    #[prop(into, default = "Join Our Waitlist".into())] title: String,
    #[prop(into, default = "Tell us about you and your pets and be first to know when we launch".into())]
    subtitle: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let city = state.city;

    let form = create_rw_signal(FeedbackForm::new());
    let errors = create_rw_signal(ValidationErrors::new());
    let phase = create_rw_signal(SubmissionPhase::Editing);
    let (banner, set_banner) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().accepts_submit() {
            return;
        }

        let mut current = form.get_untracked();
        let submission = match current.submit(city.get_untracked()) {
            Ok(submission) => submission,
            Err(e) => {
                errors.set(e);
                return;
            }
        };

        // `submit` cleared the fields
        form.set(current);
        errors.set(ValidationErrors::new());
        phase.set(SubmissionPhase::Submitting);

        let state = state.clone();
        gloo_timers::callback::Timeout::new(ACK_DELAY_MS, move || {
            match serde_json::to_string(&submission) {
                Ok(json) => web_sys::console::log_1(&format!("Feedback submitted: {}", json).into()),
                Err(e) => tracing::warn!("Could not serialize feedback: {}", e),
            }

            set_banner.set(Some(submission.acknowledgement()));
            state.show_success("Thank you for your feedback!");
            phase.set(SubmissionPhase::Submitted);

            gloo_timers::callback::Timeout::new(SUCCESS_BANNER_MS, move || {
                set_banner.set(None);
                phase.set(SubmissionPhase::Editing);
            })
            .forget();
        })
        .forget();
    };

    let input_class = "w-full rounded-lg border border-gray-300 px-3 py-2 focus:outline-none focus:ring-2";

    view! {
        <section id=anchor class="py-16 px-4">
            <div class="container mx-auto max-w-2xl">
                <h2 class="text-3xl font-bold text-center mb-2">{title}</h2>
                <p class="text-center text-gray-600 mb-8">{subtitle}</p>

                {move || banner.get().map(|message| view! {
                    <div class="mb-6 rounded-xl border border-green-200 bg-green-50 p-4 text-green-800">
                        <p class="font-semibold">"Thank you for your feedback!"</p>
                        <p class="text-sm">{message}</p>
                    </div>
                })}

                <form
                    on:submit=on_submit
                    class="bg-white rounded-xl shadow-sm p-6 space-y-5"
                    class:hidden=move || phase.get() == SubmissionPhase::Submitted
                >
                    <div class="grid gap-4 md:grid-cols-2">
                        <div>
                            <label class="block text-sm font-medium mb-1">"Name"</label>
                            <input
                                type="text"
                                class=input_class
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                            <FieldMessage errors=errors field="name" />
                        </div>
                        <div>
                            <label class="block text-sm font-medium mb-1">"Email"</label>
                            <input
                                type="email"
                                class=input_class
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                            <FieldMessage errors=errors field="email" />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium mb-1">"City"</label>
                        <input
                            type="text"
                            placeholder="Where do you live?"
                            class=input_class
                            prop:value=move || form.with(|f| f.city.clone())
                            on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                        />
                    </div>

                    <fieldset>
                        <legend class="block text-sm font-medium mb-2">"Pets you own"</legend>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-2">
                            {PET_TYPES.into_iter().map(|pet| view! {
                                <label class="flex items-center space-x-2 text-sm">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || form.with(|f| f.has_pet_type(pet))
                                        on:change=move |_| form.update(|f| f.toggle_pet_type(pet))
                                    />
                                    <span>{pet}</span>
                                </label>
                            }).collect_view()}
                        </div>
                    </fieldset>

                    <div>
                        <label class="block text-sm font-medium mb-1">"How would you use PawConnect?"</label>
                        <select
                            class=input_class
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.use_case = UseCase::from_label(&value));
                            }
                        >
                            <option value="" selected=move || form.with(|f| f.use_case.is_none())>
                                "Select an option"
                            </option>
                            {UseCase::ALL.into_iter().map(|use_case| view! {
                                <option
                                    value=use_case.label()
                                    selected=move || form.with(|f| f.use_case == Some(use_case))
                                >
                                    {use_case.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <Show when=move || form.with(|f| f.shows_custom_use_case())>
                        <div>
                            <label class="block text-sm font-medium mb-1">"Tell us more"</label>
                            <input
                                type="text"
                                class=input_class
                                prop:value=move || form.with(|f| f.custom_use_case.clone())
                                on:input=move |ev| form.update(|f| f.custom_use_case = event_target_value(&ev))
                            />
                            <FieldMessage errors=errors field="custom_use_case" />
                        </div>
                    </Show>

                    <div>
                        <label class="block text-sm font-medium mb-1">"Which features matter most to you?"</label>
                        <textarea
                            rows="3"
                            class=input_class
                            prop:value=move || form.with(|f| f.features.clone())
                            on:input=move |ev| form.update(|f| f.features = event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label class="flex items-start space-x-2 text-sm">
                            <input
                                type="checkbox"
                                class="mt-1"
                                prop:checked=move || form.with(|f| f.privacy)
                                on:change=move |ev| form.update(|f| f.privacy = event_target_checked(&ev))
                            />
                            <span>"I agree to the privacy policy and to receive updates about PawConnect"</span>
                        </label>
                        <FieldMessage errors=errors field="privacy" />
                    </div>

                    <button
                        type="submit"
                        disabled=move || !phase.get().accepts_submit()
                        class=move || format!(
                            "w-full py-3 rounded-lg font-semibold disabled:opacity-60 {}",
                            theme.get().button_classes()
                        )
                    >
                        {move || if phase.get().is_busy() { "Submitting..." } else { "Submit Feedback" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
