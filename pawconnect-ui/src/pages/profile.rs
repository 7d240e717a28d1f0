//! Profile Page
//!
//! The demo user for the selected city, split into a details tab and a
//! pets tab. Pets added through the dialog stay until the page is left.

use leptos::*;
use leptos_router::*;
use pawconnect::city::city_label;
use pawconnect::dataset::User;
use pawconnect::forms::added_message;
use pawconnect::profile::{current_user, NewPet, PetRoster, ProfileTab};
use pawconnect::theme::ClassTokens;

use crate::components::{AddPetForm, PetCard, ProfileCard};
use crate::state::global::GlobalState;

#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let dataset = state.dataset;

    let user = create_memo(move |_| {
        dataset.with(|d| current_user(&d.users, city.get()).cloned())
    });

    view! {
        <div class="container mx-auto px-4 py-10">
            {move || match user.get() {
                Some(user) => {
                    let roster = dataset.with_untracked(|d| PetRoster::for_user(&user, &d.pets));
                    view! { <ProfileContent user=user roster=roster /> }.into_view()
                }
                None => view! {
                    <p class="text-center text-gray-500 py-16">"No profile available yet."</p>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ProfileContent(user: User, roster: PetRoster) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    let roster = create_rw_signal(roster);
    let tab = create_rw_signal(ProfileTab::default());
    let dialog_open = create_rw_signal(false);
    let pet_count = Signal::derive(move || roster.with(|r| r.len()));

    let on_added = Callback::new(move |new_pet: NewPet| {
        let pet = roster.try_update(|r| r.add(new_pet));
        if let Some(pet) = pet {
            state.show_success(&added_message(&pet.name));
        }
    });

    let card_user = user.clone();
    let open_dialog = move |_| {
        tab.set(ProfileTab::Pets);
        dialog_open.set(true);
    };

    view! {
        <div class="flex flex-col-reverse md:flex-row gap-8">
            <aside class="md:w-1/3 space-y-6">
                <ProfileCard user=card_user pet_count=pet_count />

                <div class="bg-white rounded-xl shadow-sm p-4">
                    <h3 class="text-lg font-semibold mb-4">"Quick Actions"</h3>
                    <div class="space-y-3">
                        <A href="/directory">
                            <span class="block w-full text-center px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50">
                                "Find Pet Owners"
                            </span>
                        </A>
                        <button
                            on:click=open_dialog
                            class="w-full px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                        >
                            "Add Pet Profile"
                        </button>
                    </div>
                </div>
            </aside>

            <section class="md:w-2/3">
                <div class="border-b border-gray-200 mb-6 flex space-x-4">
                    {ProfileTab::ALL.into_iter().map(|t| view! {
                        <button
                            on:click=move |_| tab.set(t)
                            class=move || tab_class(tab.get() == t, theme.get().tokens)
                        >
                            {move || t.label(pet_count.get())}
                        </button>
                    }).collect_view()}
                </div>

                {move || match tab.get() {
                    ProfileTab::Profile => view! { <ProfileDetails user=user.clone() /> }.into_view(),
                    ProfileTab::Pets => view! {
                        <div class="space-y-6">
                            <div class="flex items-center justify-between">
                                <h2 class="text-2xl font-bold">"My Pets"</h2>
                                <button
                                    on:click=move |_| dialog_open.set(true)
                                    class=move || format!("px-4 py-2 rounded-lg font-medium {}", theme.get().button_classes())
                                >
                                    "+ Add Pet"
                                </button>
                            </div>
                            <PetList roster=roster />
                        </div>
                    }.into_view(),
                }}
            </section>

            <AddPetForm open=dialog_open on_added=on_added />
        </div>
    }
}

#[component]
fn PetList(roster: RwSignal<PetRoster>) -> impl IntoView {
    move || {
        let pets = roster.with(|r| r.pets().to_vec());
        if pets.is_empty() {
            view! {
                <div class="rounded-xl border border-dashed border-gray-300 p-10 text-center">
                    <h3 class="text-lg font-medium mb-1">"No pets added yet"</h3>
                    <p class="text-gray-500">"Add your furry, feathery, or scaly friends to your profile."</p>
                </div>
            }.into_view()
        } else {
            view! {
                <div class="grid gap-6 md:grid-cols-2">
                    {pets.into_iter().map(|pet| view! { <PetCard pet=pet /> }).collect_view()}
                </div>
            }.into_view()
        }
    }
}

/// Editable copy of the user's details; saving only confirms
#[component]
fn ProfileDetails(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let city = state.city;

    let (name, set_name) = create_signal(user.name);
    let (bio, set_bio) = create_signal(user.bio);

    let on_save = move |_| {
        tracing::info!(name = %name.get_untracked(), "Profile changes saved");
        state.show_success("Your profile has been updated.");
    };

    let input_class = "w-full p-2 border border-gray-300 rounded-md";

    view! {
        <div class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-2xl font-bold mb-4">"My Profile"</h2>
            <p class="text-gray-500 mb-4">"Manage your personal information and preferences."</p>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm font-medium mb-1">"Full Name"</label>
                    <input
                        type="text"
                        class=input_class
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium mb-1">"Bio"</label>
                    <textarea
                        class=format!("{} h-24", input_class)
                        prop:value=bio
                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium mb-1">"Location"</label>
                    <div class=format!("{} text-gray-500", input_class)>
                        {move || city_label(city.get(), "Select a city")}
                    </div>
                </div>
                <div class="pt-4">
                    <button
                        on:click=on_save
                        class=move || format!("px-4 py-2 rounded-lg font-medium {}", theme.get().button_classes())
                    >
                        "Save Changes"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn tab_class(active: bool, tokens: ClassTokens) -> String {
    if active {
        format!(
            "px-4 py-2 -mb-px text-sm font-medium border-b-2 {} {}",
            tokens.text, tokens.border
        )
    } else {
        "px-4 py-2 -mb-px text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-900"
            .to_string()
    }
}
