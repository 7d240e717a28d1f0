//! Info Card Component
//!
//! Article teaser for the info hub grid, with a session-only bookmark.

use leptos::*;
use pawconnect::dataset::Article;
use pawconnect::infohub::{format_date, reading_time_minutes};

use crate::state::global::GlobalState;

#[component]
pub fn InfoCard(
    article: Article,
    /// Opens the full article
    #[prop(into)]
    on_open: Callback<Article>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    let (bookmarked, set_bookmarked) = create_signal(false);
    let (image_failed, set_image_failed) = create_signal(false);

    let minutes = reading_time_minutes(&article.content);
    let date = format_date(article.date);
    let image = article.image.clone();
    let title = article.title.clone();

    let toggle_bookmark = move |_| {
        let now = !bookmarked.get_untracked();
        set_bookmarked.set(now);
        if now {
            state.show_success("Article bookmarked");
        }
    };

    let open = {
        let article = article.clone();
        move |_| on_open.call(article.clone())
    };

    view! {
        <article class="bg-white rounded-xl shadow-sm overflow-hidden flex flex-col">
            <Show when=move || !image_failed.get()>
                <img
                    src=image.clone()
                    alt=title.clone()
                    class="w-full h-44 object-cover"
                    on:error=move |_| set_image_failed.set(true)
                />
            </Show>

            <div class="p-5 flex-1 flex flex-col">
                <div class="flex items-center justify-between text-xs text-gray-500 mb-2">
                    <span class=move || format!(
                        "px-2 py-0.5 rounded-full {} {}",
                        theme.get().tokens.light_bg,
                        theme.get().tokens.text,
                    )>
                        {article.category.clone()}
                    </span>
                    <span>{format!("{} · {} min read", date, minutes)}</span>
                </div>

                <h3 class="text-lg font-semibold mb-2">{article.title.clone()}</h3>
                <p class="text-sm text-gray-600 mb-4 flex-1">{article.excerpt.clone()}</p>

                <div class="flex items-center justify-between">
                    <button
                        on:click=open
                        class=move || format!("text-sm font-medium {} {}", theme.get().tokens.text, theme.get().tokens.text_hover)
                    >
                        "Read article →"
                    </button>
                    <button
                        on:click=toggle_bookmark
                        aria-label="Bookmark"
                        class="text-xl"
                        title=move || if bookmarked.get() { "Remove bookmark" } else { "Bookmark" }
                    >
                        {move || if bookmarked.get() { "🔖" } else { "📑" }}
                    </button>
                </div>
            </div>
        </article>
    }
}
