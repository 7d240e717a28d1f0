//! Directory Page
//!
//! Service providers in the selected city: search, category filters,
//! sorting, list/grid layout and paging.

use leptos::*;
use pawconnect::directory::{DirectoryFilter, DirectoryQuery, DirectoryView, SortOrder, PAGE_SIZE};

use crate::components::{DirectorySearch, ServiceCard};
use crate::state::global::GlobalState;

#[component]
pub fn Directory() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let dataset = state.dataset;
    let theme = state.theme;

    let filter = create_rw_signal(DirectoryFilter {
        city: city.get_untracked(),
        ..DirectoryFilter::default()
    });
    let sort = create_rw_signal(SortOrder::default());
    let page = create_rw_signal(1usize);
    let layout = create_rw_signal(DirectoryView::default());

    // Follow the city picked elsewhere
    create_effect(move |_| {
        let selected = city.get();
        filter.update(|f| f.city = selected);
        page.set(1);
    });

    let results = Signal::derive(move || {
        let query = DirectoryQuery {
            filter: filter.get(),
            sort: sort.get(),
            page: page.get(),
            page_size: PAGE_SIZE,
        };
        dataset.with(|d| query.run(&d.providers))
    });

    let heading = move || match city.get() {
        Some(c) => format!("Pet Services in {}", c.display_name()),
        None => "Pet Services".to_string(),
    };

    view! {
        <div class="container mx-auto px-4 py-10 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{heading}</h1>
                <p class="text-gray-600 mt-1">"Find trusted vets, groomers, sitters and more near you"</p>
            </div>

            <DirectorySearch filter=filter sort=sort page=page layout=layout />

            <p class="text-sm text-gray-500">
                {move || match results.with(|r| r.total_items) {
                    1 => "1 service found".to_string(),
                    n => format!("{} services found", n),
                }}
            </p>

            {move || {
                let current = results.get();
                if current.items.is_empty() {
                    return view! {
                        <div class="bg-white rounded-xl shadow-sm p-10 text-center">
                            <p class="text-gray-500 mb-4">"No services found matching your criteria."</p>
                            <button
                                on:click=move |_| {
                                    filter.update(|f| f.clear());
                                    page.set(1);
                                }
                                class=move || format!("px-4 py-2 rounded-lg {}", theme.get().button_classes())
                            >
                                "Clear filters"
                            </button>
                        </div>
                    }.into_view();
                }

                let grid_class = match layout.get() {
                    DirectoryView::List => "space-y-4",
                    DirectoryView::Grid => "grid gap-6 md:grid-cols-2",
                };
                let cards = dataset.with(|d| {
                    current
                        .items
                        .iter()
                        .map(|provider| (provider.clone(), d.category_name(provider.category).to_string()))
                        .collect::<Vec<_>>()
                });

                view! {
                    <div class=grid_class>
                        {cards.into_iter().map(|(provider, category)| view! {
                            <ServiceCard provider=provider category=category layout=layout.get_untracked() />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}

            // Paging
            {move || {
                let current = results.get();
                let shown = current.page;
                (current.total_pages > 1).then(|| view! {
                    <div class="flex items-center justify-center space-x-4">
                        <button
                            disabled=!current.has_previous()
                            on:click=move |_| page.set(shown.saturating_sub(1).max(1))
                            class="px-4 py-2 rounded-lg border border-gray-300 disabled:opacity-40 hover:bg-gray-50"
                        >
                            "Previous"
                        </button>
                        <span class="text-sm text-gray-600">
                            {format!("Page {} of {}", current.page, current.total_pages)}
                        </span>
                        <button
                            disabled=!current.has_next()
                            on:click=move |_| page.set(shown + 1)
                            class="px-4 py-2 rounded-lg border border-gray-300 disabled:opacity-40 hover:bg-gray-50"
                        >
                            "Next"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
