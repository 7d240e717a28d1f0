//! Pet Card Component

use leptos::*;
use pawconnect::dataset::Pet;
use pawconnect::profile::age_label;

#[component]
pub fn PetCard(pet: Pet) -> impl IntoView {
    let (image_failed, set_image_failed) = create_signal(pet.image.is_empty());
    let image = pet.image.clone();
    let name = pet.name.clone();
    let icon = pet.kind.icon();

    view! {
        <div class="bg-white rounded-xl shadow-sm overflow-hidden">
            {move || {
                if image_failed.get() {
                    view! {
                        <div class="w-full h-48 bg-gray-100 flex items-center justify-center text-6xl">
                            {icon}
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <img
                            src=image.clone()
                            alt=name.clone()
                            class="w-full h-48 object-cover"
                            on:error=move |_| set_image_failed.set(true)
                        />
                    }.into_view()
                }
            }}
            <div class="p-4">
                <div class="flex items-center justify-between mb-1">
                    <h3 class="text-lg font-semibold">{pet.name.clone()}</h3>
                    <span class="text-sm text-gray-500">{format!("{} {}", icon, pet.kind.label())}</span>
                </div>
                <p class="text-sm text-gray-500 mb-2">
                    {format!("{} · {}", pet.breed, age_label(pet.age))}
                </p>
                <p class="text-sm text-gray-700">{pet.bio.clone()}</p>
            </div>
        </div>
    }
}
