//! Add Pet Dialog
//!
//! Modal form bound to [`NewPetForm`]. The photo is checked for type and
//! size before a preview URL is created for it.

use leptos::*;
use pawconnect::dataset::PetKind;
use pawconnect::forms::{
    NewPetForm, PhotoUpload, SubmissionPhase, ValidationErrors, ACK_DELAY_MS, MAX_BIO_CHARS,
};
use pawconnect::profile::NewPet;

use super::FieldMessage;
use crate::state::global::GlobalState;

#[component]
pub fn AddPetForm(
    open: RwSignal<bool>,
    /// Receives the validated pet once the simulated save finishes
    #[prop(into)]
    on_added: Callback<NewPet>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    let form = create_rw_signal(NewPetForm::new());
    let errors = create_rw_signal(ValidationErrors::new());
    let phase = create_rw_signal(SubmissionPhase::Editing);

    let close = move || {
        form.set(NewPetForm::new());
        errors.set(ValidationErrors::new());
        open.set(false);
    };

    let on_photo = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let mime = file.type_();
        let size = file.size() as u64;
        if let Err(message) = PhotoUpload::check(&mime, size) {
            errors.update(|e| e.add("photo", message));
            input.set_value("");
            return;
        }

        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                let upload = PhotoUpload { mime, size, url };
                form.update(|f| {
                    // Already checked above
                    let _ = f.set_photo(upload);
                });
                errors.update(|e| e.remove("photo"));
            }
            Err(e) => {
                web_sys::console::error_1(&e);
                errors.update(|errs| errs.add("photo", "Could not read the selected image"));
            }
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }

        let mut current = form.get_untracked();
        match current.submit() {
            Ok(new_pet) => {
                errors.set(ValidationErrors::new());
                phase.set(SubmissionPhase::Submitting);

                gloo_timers::callback::Timeout::new(ACK_DELAY_MS, move || {
                    on_added.call(new_pet);
                    phase.set(SubmissionPhase::Editing);
                    close();
                })
                .forget();
            }
            Err(e) => errors.set(e),
        }
    };

    let input_class = "w-full rounded-lg border border-gray-300 px-3 py-2 focus:outline-none focus:ring-2";

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4">
                <form
                    on:submit=on_submit
                    class="bg-white rounded-xl shadow-xl w-full max-w-lg max-h-[90vh] overflow-y-auto p-6 space-y-4"
                >
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-bold">"Add a New Pet"</h2>
                        <button type="button" class="text-gray-400 hover:text-gray-700" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    // Photo
                    <div>
                        <label class="block text-sm font-medium mb-1">"Photo"</label>
                        {move || form.with(|f| f.photo.as_ref().map(|p| p.url.clone())).map(|url| view! {
                            <img src=url alt="Pet preview" class="w-32 h-32 rounded-lg object-cover mb-2" />
                        })}
                        <input type="file" accept="image/*" on:change=on_photo class="text-sm" />
                        <FieldMessage errors=errors field="photo" />
                    </div>

                    // Name
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

                    // Kind and breed
                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <label class="block text-sm font-medium mb-1">"Type"</label>
                            <select
                                class=input_class
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    if let Some(kind) = PetKind::ALL.into_iter().find(|k| k.label() == value) {
                                        form.update(|f| f.kind = kind);
                                    }
                                }
                            >
                                {PetKind::ALL.into_iter().map(|kind| view! {
                                    <option value=kind.label() selected=move || form.with(|f| f.kind == kind)>
                                        {kind.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium mb-1">"Breed"</label>
                            <input
                                type="text"
                                class=input_class
                                prop:value=move || form.with(|f| f.breed.clone())
                                on:input=move |ev| form.update(|f| f.breed = event_target_value(&ev))
                            />
                            <FieldMessage errors=errors field="breed" />
                        </div>
                    </div>

                    // Age
                    <div>
                        <label class="block text-sm font-medium mb-1">"Age (years)"</label>
                        <input
                            type="number"
                            step="0.5"
                            min="0"
                            max="50"
                            class=input_class
                            prop:value=move || form.with(|f| f.age.clone())
                            on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                        />
                        <FieldMessage errors=errors field="age" />
                    </div>

                    // Bio
                    <div>
                        <label class="block text-sm font-medium mb-1">"Bio"</label>
                        <textarea
                            rows="3"
                            class=input_class
                            prop:value=move || form.with(|f| f.bio.clone())
                            on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                        />
                        <p class=move || {
                            let over = form.with(|f| f.bio_remaining()) < 0;
                            if over { "text-xs text-red-600 text-right" } else { "text-xs text-gray-400 text-right" }
                        }>
                            {move || format!("{}/{}", form.with(|f| f.bio.chars().count()), MAX_BIO_CHARS)}
                        </p>
                        <FieldMessage errors=errors field="bio" />
                    </div>

                    <div class="flex justify-end space-x-3 pt-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || phase.get().is_busy()
                            class=move || format!("px-4 py-2 rounded-lg font-medium disabled:opacity-60 {}", theme.get().button_classes())
                        >
                            {move || if phase.get().is_busy() { "Adding..." } else { "Add Pet" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

