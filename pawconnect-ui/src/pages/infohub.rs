//! Info Hub Page
//!
//! Articles for the selected city with a text search and category chips.
//! Opening an article replaces the grid until "Back" is pressed.

use leptos::*;
use pawconnect::dataset::Article;
use pawconnect::infohub::{categories, ArticleFilter};

use crate::components::{ArticleView, InfoCard};
use crate::state::global::GlobalState;

#[component]
pub fn InfoHub() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let city = state.city;
    let dataset = state.dataset;
    let theme = state.theme;

    let filter = create_rw_signal(ArticleFilter::with_city(city.get_untracked()));
    let open_article = create_rw_signal(None::<Article>);

    // Follow the city picked elsewhere
    create_effect(move |_| {
        let selected = city.get();
        filter.update(|f| {
            f.city = selected;
            f.category = None;
        });
        open_article.set(None);
    });

    let city_articles = create_memo(move |_| {
        let selected = city.get();
        dataset.with(|d| {
            d.articles
                .iter()
                .filter(|a| selected.map_or(true, |c| a.city == c))
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let chips = create_memo(move |_| city_articles.with(|a| categories(a)));
    let visible = Signal::derive(move || {
        let current = filter.get();
        city_articles.with(|a| current.apply(a).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_open = Callback::new(move |article: Article| open_article.set(Some(article)));
    let on_back = Callback::new(move |_: ()| open_article.set(None));

    let heading = move || match city.get() {
        Some(c) => format!("{} Pet Info Hub", c.display_name()),
        None => "Pet Info Hub".to_string(),
    };

    view! {
        <div class="container mx-auto px-4 py-10">
            {move || match open_article.get() {
                Some(article) => view! { <ArticleView article=article on_back=on_back /> }.into_view(),
                None => view! {
                    <div class="space-y-6">
                        <div>
                            <h1 class="text-3xl font-bold">{heading}</h1>
                            <p class="text-gray-600 mt-1">"Local rules, health tips and guides for pet owners"</p>
                        </div>

                        <input
                            type="search"
                            placeholder="Search articles..."
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                            class="w-full rounded-lg border border-gray-300 px-4 py-2 focus:outline-none focus:ring-2"
                        />

                        <div class="flex flex-wrap gap-2">
                            <button
                                on:click=move |_| filter.update(|f| f.category = None)
                                class=move || chip_class(filter.with(|f| f.category.is_none()), theme.get().button_classes())
                            >
                                "All"
                            </button>
                            {move || chips.get().into_iter().map(|category| {
                                let name = category.clone();
                                let active = category.clone();
                                view! {
                                    <button
                                        on:click=move |_| filter.update(|f| f.toggle_category(&name))
                                        class=move || chip_class(
                                            filter.with(|f| f.category.as_deref() == Some(active.as_str())),
                                            theme.get().button_classes(),
                                        )
                                    >
                                        {category}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        {move || {
                            let articles = visible.get();
                            if articles.is_empty() {
                                view! {
                                    <div class="bg-white rounded-xl shadow-sm p-10 text-center">
                                        <p class="text-gray-500 mb-4">"No articles found."</p>
                                        <button
                                            class="text-sm underline text-gray-600"
                                            on:click=move |_| filter.update(|f| f.clear())
                                        >
                                            "Clear search"
                                        </button>
                                    </div>
                                }.into_view()
                            } else {
                                view! {
                                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                                        {articles.into_iter().map(|article| view! {
                                            <InfoCard article=article on_open=on_open />
                                        }).collect_view()}
                                    </div>
                                }.into_view()
                            }
                        }}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

fn chip_class(active: bool, active_classes: String) -> String {
    if active {
        format!("px-4 py-1.5 rounded-full text-sm {}", active_classes)
    } else {
        "px-4 py-1.5 rounded-full text-sm bg-gray-100 text-gray-700 hover:bg-gray-200".to_string()
    }
}
