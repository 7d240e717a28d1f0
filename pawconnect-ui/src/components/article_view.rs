//! Article View Component

use leptos::*;
use pawconnect::dataset::Article;
use pawconnect::infohub::{format_date, reading_time_minutes};

use crate::state::global::GlobalState;

/// Full article with a back link to the list
#[component]
pub fn ArticleView(article: Article, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let (image_failed, set_image_failed) = create_signal(false);

    let image = article.image.clone();
    let title = article.title.clone();
    let paragraphs: Vec<String> = article
        .content
        .split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    view! {
        <div class="max-w-3xl mx-auto">
            <button
                on:click=move |_| on_back.call(())
                class=move || format!("mb-6 text-sm font-medium {}", theme.get().tokens.text)
            >
                "← Back to articles"
            </button>

            <Show when=move || !image_failed.get()>
                <img
                    src=image.clone()
                    alt=title.clone()
                    class="w-full h-72 object-cover rounded-xl mb-6"
                    on:error=move |_| set_image_failed.set(true)
                />
            </Show>

            <div class="flex items-center space-x-3 text-sm text-gray-500 mb-3">
                <span>{article.category.clone()}</span>
                <span>"·"</span>
                <span>{format_date(article.date)}</span>
                <span>"·"</span>
                <span>{format!("{} min read", reading_time_minutes(&article.content))}</span>
            </div>

            <h1 class="text-3xl font-bold mb-6">{article.title.clone()}</h1>

            <div class="space-y-4 text-gray-700 leading-relaxed">
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>

            <div class="flex flex-wrap gap-2 mt-8">
                {article.tags.iter().map(|tag| view! {
                    <span class="text-xs bg-gray-100 text-gray-600 px-2 py-1 rounded">{format!("#{}", tag)}</span>
                }).collect_view()}
            </div>
        </div>
    }
}
