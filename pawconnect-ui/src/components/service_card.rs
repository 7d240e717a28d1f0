//! Service Card Component
//!
//! A directory listing. The image is dropped if it fails to load and long
//! descriptions collapse behind a "Read more" toggle.

use leptos::*;
use pawconnect::dataset::ServiceProvider;
use pawconnect::directory::DirectoryView;

use crate::state::global::GlobalState;

/// Descriptions longer than this collapse
const COLLAPSED_CHARS: usize = 120;

#[component]
pub fn ServiceCard(
    provider: ServiceProvider,
    #[prop(into)] category: String,
    #[prop(default = DirectoryView::List)] layout: DirectoryView,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    let (image_failed, set_image_failed) = create_signal(false);
    let (expanded, set_expanded) = create_signal(false);

    let image = provider.image.clone();
    let name = provider.name.clone();
    let description = provider.description.clone();
    let collapsible = description.chars().count() > COLLAPSED_CHARS;

    let container_class = match layout {
        DirectoryView::List => "bg-white rounded-xl shadow-sm overflow-hidden flex flex-col md:flex-row",
        DirectoryView::Grid => "bg-white rounded-xl shadow-sm overflow-hidden flex flex-col",
    };
    let image_class = match layout {
        DirectoryView::List => "w-full md:w-48 h-48 md:h-auto object-cover",
        DirectoryView::Grid => "w-full h-48 object-cover",
    };

    view! {
        <article class=container_class>
            <Show when=move || !image_failed.get()>
                <img
                    src=image.clone()
                    alt=name.clone()
                    class=image_class
                    on:error=move |_| set_image_failed.set(true)
                />
            </Show>

            <div class="p-5 flex-1 flex flex-col">
                <div class="flex items-start justify-between mb-2">
                    <div>
                        <h3 class="text-lg font-semibold">{provider.name.clone()}</h3>
                        <span class=move || format!(
                            "inline-block mt-1 text-xs px-2 py-0.5 rounded-full {} {}",
                            theme.get().tokens.light_bg,
                            theme.get().tokens.text,
                        )>
                            {category}
                        </span>
                    </div>
                    <div class="flex items-center space-x-1 text-sm font-medium">
                        <span class="text-yellow-500">"★"</span>
                        <span>{format!("{:.1}", provider.rating)}</span>
                    </div>
                </div>

                <p class="text-sm text-gray-600 mb-2">
                    {move || {
                        if expanded.get() || !collapsible {
                            description.clone()
                        } else {
                            excerpt(&description, COLLAPSED_CHARS)
                        }
                    }}
                </p>
                {collapsible.then(|| view! {
                    <button
                        class=move || format!("text-sm font-medium self-start mb-3 {}", theme.get().tokens.text)
                        on:click=move |_| set_expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Show less" } else { "Read more" }}
                    </button>
                })}

                <div class="flex flex-wrap gap-1 mb-3">
                    {provider.tags.iter().map(|tag| view! {
                        <span class="text-xs bg-gray-100 text-gray-600 px-2 py-0.5 rounded">{tag.clone()}</span>
                    }).collect_view()}
                </div>

                <div class="mt-auto space-y-1 text-sm text-gray-500">
                    <div>"📍 " {provider.address.clone()}</div>
                    <div>"📞 " {provider.phone.clone()}</div>
                    <div class="flex space-x-4">
                        <a href=provider.website.clone() target="_blank" rel="noopener noreferrer"
                           class=move || format!("{} {}", theme.get().tokens.text, theme.get().tokens.text_hover)>
                            "Website"
                        </a>
                        <a href=format!("mailto:{}", provider.email)
                           class=move || format!("{} {}", theme.get().tokens.text, theme.get().tokens.text_hover)>
                            "Email"
                        </a>
                    </div>
                </div>
            </div>
        </article>
    }
}

/// First `max` characters of `text` with an ellipsis, cut at a word boundary
fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max).collect();
    let trimmed = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}...", trimmed.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text_untouched() {
        assert_eq!(excerpt("Friendly vets", 120), "Friendly vets");
    }

    #[test]
    fn test_excerpt_cuts_at_word() {
        assert_eq!(excerpt("Grooming for dogs and cats", 15), "Grooming for...");
    }
}
