//! Confession Grid Component
//!
//! The wall itself, plus its loading and empty states.

use leptos::*;

use crate::components::ConfessionCard;
use crate::state::global::AppState;

/// Responsive grid of confession cards
#[component]
pub fn ConfessionGrid() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    // Extract the signals we need
    let loading = state.loading;
    let store = state.store;
    let compose_open = state.compose_open;

    view! {
        {move || {
            if loading.get() {
                return view! { <LoadingState /> }.into_view();
            }

            if store.with(|s| s.is_empty()) {
                view! {
                    <EmptyState on_compose=move || compose_open.set(true) />
                }.into_view()
            } else {
                let confessions = store.with(|s| s.confessions().to_vec());
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {confessions
                            .into_iter()
                            .enumerate()
                            .map(|(index, confession)| view! {
                                <ConfessionCard confession=confession index=index />
                            })
                            .collect_view()}
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Spinner shown while the wall loads
#[component]
fn LoadingState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 space-y-4">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400">"Summoning whispers..."</p>
        </div>
    }
}

/// Shown when the wall has no confessions
#[component]
fn EmptyState(on_compose: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <span class="text-4xl">"🌙"</span>
            <p class="text-gray-400 mt-4">"The night is quiet. No confessions yet."</p>
            <button
                on:click=move |_| on_compose()
                class="mt-6 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Be the first to share"
            </button>
        </div>
    }
}
