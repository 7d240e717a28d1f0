//! Directory Search Component
//!
//! Query box, collapsible category filter panel, chips for the active
//! categories, sort order and list/grid toggle. Every change sends the
//! directory back to page 1.

use leptos::*;
use pawconnect::directory::{DirectoryFilter, DirectoryView, SortOrder};

use crate::state::global::GlobalState;

#[component]
pub fn DirectorySearch(
    filter: RwSignal<DirectoryFilter>,
    sort: RwSignal<SortOrder>,
    page: RwSignal<usize>,
    layout: RwSignal<DirectoryView>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let dataset = state.dataset;
    let (panel_open, set_panel_open) = create_signal(false);

    let toggle_category = move |id: u32| {
        filter.update(|f| f.toggle_category(id));
        page.set(1);
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm p-4 space-y-4">
            <div class="flex flex-col md:flex-row gap-3">
                // Query
                <input
                    type="search"
                    placeholder="Search services..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| {
                        filter.update(|f| f.query = event_target_value(&ev));
                        page.set(1);
                    }
                    class="flex-1 rounded-lg border border-gray-300 px-4 py-2 focus:outline-none focus:ring-2"
                />

                // Filter panel toggle with active count
                <button
                    on:click=move |_| set_panel_open.update(|open| *open = !*open)
                    class="relative px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                >
                    "Filters"
                    {move || {
                        let count = filter.with(|f| f.categories.len());
                        (count > 0).then(|| view! {
                            <span class=move || format!(
                                "absolute -top-2 -right-2 text-xs text-white w-5 h-5 rounded-full flex items-center justify-center {}",
                                theme.get().tokens.bg
                            )>
                                {count}
                            </span>
                        })
                    }}
                </button>

                // Sort
                <select
                    class="rounded-lg border border-gray-300 px-3 py-2"
                    on:change=move |ev| {
                        if let Ok(order) = event_target_value(&ev).parse::<SortOrder>() {
                            sort.set(order);
                            page.set(1);
                        }
                    }
                >
                    {SortOrder::ALL.into_iter().map(|order| view! {
                        <option value=order.as_str() selected=move || sort.get() == order>
                            {order.label()}
                        </option>
                    }).collect_view()}
                </select>

                // Layout
                <button
                    on:click=move |_| layout.update(|l| *l = l.toggled())
                    class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-50"
                    title="Toggle layout"
                >
                    {move || match layout.get() {
                        DirectoryView::List => "▦ Grid",
                        DirectoryView::Grid => "☰ List",
                    }}
                </button>
            </div>

            // Category panel
            <Show when=move || panel_open.get()>
                <div class="border-t border-gray-100 pt-4">
                    <div class="flex items-center justify-between mb-2">
                        <h4 class="text-sm font-semibold text-gray-700">"Categories"</h4>
                        <button
                            class="text-sm text-gray-500 hover:text-gray-800"
                            on:click=move |_| {
                                filter.update(|f| f.clear());
                                page.set(1);
                            }
                        >
                            "Clear all"
                        </button>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-2">
                        {move || dataset.with(|d| d.categories.clone()).into_iter().map(|category| {
                            let id = category.id;
                            view! {
                                <label class="flex items-center space-x-2 text-sm cursor-pointer">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || filter.with(|f| f.categories.contains(&id))
                                        on:change=move |_| toggle_category(id)
                                    />
                                    <span>{category.icon.clone()} " " {category.name.clone()}</span>
                                </label>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </Show>

            // Active category chips
            {move || {
                let selected = filter.with(|f| f.categories.clone());
                let chips = dataset.with(|d| {
                    d.categories
                        .iter()
                        .filter(|c| selected.contains(&c.id))
                        .map(|c| (c.id, c.name.clone()))
                        .collect::<Vec<_>>()
                });

                (!chips.is_empty()).then(|| view! {
                    <div class="flex flex-wrap gap-2">
                        {chips.into_iter().map(|(id, name)| view! {
                            <button
                                on:click=move |_| toggle_category(id)
                                class=move || format!(
                                    "inline-flex items-center space-x-1 px-3 py-1 rounded-full text-sm {} {}",
                                    theme.get().tokens.light_bg,
                                    theme.get().tokens.text,
                                )
                            >
                                <span>{name}</span>
                                <span>"×"</span>
                            </button>
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
