//! Confession Card Component
//!
//! Displays a single confession with its age and reaction row.

use leptos::*;

use crate::state::global::AppState;
use crate::state::store::{time_ago, Confession, Reaction};

/// Single confession card
#[component]
pub fn ConfessionCard(
    /// The confession to render
    confession: Confession,
    /// Position on the wall, used as the card ordinal and reaction target
    index: usize,
) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let now = chrono::Utc::now().timestamp_millis();
    let age = time_ago(confession.created_at, now);
    let total = confession.total_reactions();

    let reaction_buttons = Reaction::ALL
        .iter()
        .map(|&kind| {
            let state = state.clone();
            let count = confession.reaction_count(kind);
            view! {
                <ReactionButton
                    kind=kind
                    count=count
                    on_react=move || state.react(index, kind)
                />
            }
        })
        .collect_view();

    view! {
        <div class="confession-card bg-gray-800 rounded-xl p-5 border border-gray-700 hover:border-gray-600 transition-colors">
            // Ordinal and age
            <div class="flex items-center justify-between text-sm">
                <span class="text-primary-400 font-semibold">{format!("#{}", index + 1)}</span>
                <span class="text-gray-400">{age}</span>
            </div>

            // The confession itself
            <p class="mt-3 leading-relaxed">
                "\u{201c}" {confession.text.clone()} "\u{201d}"
            </p>

            // Reaction row
            <div class="flex flex-wrap gap-2 mt-4">
                {reaction_buttons}
            </div>

            {(total > 0).then(|| view! {
                <div class="text-gray-400 text-xs mt-3">
                    {total}
                    {if total == 1 { " reaction" } else { " reactions" }}
                </div>
            })}
        </div>
    }
}

/// One emoji reaction button with its count badge
#[component]
fn ReactionButton(
    kind: Reaction,
    count: u32,
    on_react: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_react()
            title=kind.label()
            class=format!(
                "reaction-{} inline-flex items-center space-x-1 bg-gray-700/60 hover:bg-gray-600 \
                 rounded-full px-2.5 py-1 text-sm transition-colors",
                kind.name()
            )
        >
            <span>{kind.emoji()}</span>
            {(count > 0).then(|| view! {
                <span class="text-xs font-semibold">{count}</span>
            })}
        </button>
    }
}
