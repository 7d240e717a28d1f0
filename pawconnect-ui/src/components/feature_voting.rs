//! Feature Voting Component
//!
//! Session-only voting on planned features. Each feature takes one vote per
//! visitor; the three leaders are flagged. Visitors can add their own idea,
//! which starts with their vote.

use leptos::*;
use pawconnect::voting::{FeatureBoard, TOP_FEATURES};

use crate::state::global::GlobalState;

#[component]
pub fn FeatureVoting(
    #[prop(default = "Help Us Build PawConnect")] title: &'static str,
    #[prop(default = "Vote for the features you want to see first")] subtitle: &'static str,
    /// Show the suggestion box under the list
    #[prop(default = true)]
    allow_suggestions: bool,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    let board = create_rw_signal(FeatureBoard::new(
        state.dataset.with_untracked(|d| d.features.clone()),
    ));
    let (suggestion, set_suggestion) = create_signal(String::new());

    let state_for_vote = state.clone();
    let vote = move |id: String| {
        match board.try_update(|b| b.vote(&id)) {
            Some(Ok(_)) => state_for_vote.show_success("Thanks for your vote!"),
            Some(Err(e)) => state_for_vote.show_error(&e.to_string()),
            None => {}
        }
    };

    let state_for_suggest = state.clone();
    let suggest = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let title = suggestion.get_untracked();
        match board.try_update(|b| b.suggest(&title).map(|f| f.title.clone())) {
            Some(Ok(added)) => {
                set_suggestion.set(String::new());
                state_for_suggest.show_success(&format!("\"{}\" added to the list", added));
            }
            Some(Err(e)) => state_for_suggest.show_error(&e.to_string()),
            None => {}
        }
    };

    view! {
        <section class="py-16 px-4 bg-gray-50">
            <div class="container mx-auto max-w-4xl">
                <h2 class="text-3xl font-bold text-center mb-2">{title}</h2>
                <p class="text-center text-gray-600 mb-10">{subtitle}</p>

                <div class="space-y-3">
                    {move || {
                        let rows = board.with(|b| {
                            b.features()
                                .iter()
                                .map(|f| (f.clone(), b.is_top(&f.id), b.has_voted(&f.id)))
                                .collect::<Vec<_>>()
                        });

                        rows.into_iter().map(|(feature, top, voted)| {
                            let id = feature.id.clone();
                            let vote = vote.clone();
                            view! {
                                <div class="bg-white rounded-xl shadow-sm p-4 flex items-center gap-4">
                                    <span class="text-3xl">{feature.icon.clone()}</span>
                                    <div class="flex-1">
                                        <div class="flex items-center gap-2">
                                            <h3 class="font-semibold">{feature.title.clone()}</h3>
                                            {top.then(|| view! {
                                                <span class=move || format!(
                                                    "text-xs px-2 py-0.5 rounded-full text-white {}",
                                                    theme.get().tokens.bg
                                                )>
                                                    {format!("Top {}", TOP_FEATURES)}
                                                </span>
                                            })}
                                        </div>
                                        <p class="text-sm text-gray-600">{feature.description.clone()}</p>
                                    </div>
                                    <div class="text-right">
                                        <div class="text-xl font-bold">{feature.votes}</div>
                                        <button
                                            disabled=voted
                                            on:click=move |_| vote(id.clone())
                                            class=move || {
                                                if voted {
                                                    "mt-1 px-3 py-1 rounded-lg text-sm bg-gray-200 text-gray-500 cursor-not-allowed".to_string()
                                                } else {
                                                    format!("mt-1 px-3 py-1 rounded-lg text-sm {}", theme.get().button_classes())
                                                }
                                            }
                                        >
                                            {if voted { "Voted" } else { "Vote" }}
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>

                {allow_suggestions.then(|| view! {
                    <form on:submit=suggest class="mt-8 flex flex-col md:flex-row gap-3">
                        <input
                            type="text"
                            placeholder="Suggest a feature..."
                            prop:value=move || suggestion.get()
                            on:input=move |ev| set_suggestion.set(event_target_value(&ev))
                            class="flex-1 rounded-lg border border-gray-300 px-4 py-2 focus:outline-none focus:ring-2"
                        />
                        <button
                            type="submit"
                            class=move || format!("px-6 py-2 rounded-lg font-medium {}", theme.get().button_classes())
                        >
                            "Suggest"
                        </button>
                    </form>
                })}
            </div>
        </section>
    }
}
