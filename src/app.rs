//! App Root Component
//!
//! Main application component with global providers and startup loading.

use leptos::*;

use crate::api::{self, SubmitMode};
use crate::components::{ComposeModal, ConfessionGrid, Header, SortBar, StarField, Toast};
use crate::state::global::{provide_app_state, AppState};
use crate::state::store::sample_confessions;

/// Delay before the locally seeded wall is revealed
const LOCAL_REVEAL_MS: u32 = 1000;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    // Extract the signals we need
    let theme = state.theme;
    let compose_open = state.compose_open;

    // Keep the document marker in sync with the active theme
    create_effect(move |_| {
        theme.get().apply();
    });

    // Populate the wall once on startup
    let state_for_load = state.clone();
    create_effect(move |_| {
        load_confessions(state_for_load.clone());
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Twinkling backdrop
            <StarField />

            // Branding, stats, and actions
            <Header />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <SortBar />
                <ConfessionGrid />
            </main>

            // Footer with wall stats
            <Footer />

            // Compose dialog
            {move || {
                if compose_open.get() {
                    view! {
                        <ComposeModal on_close=move || compose_open.set(false) />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Seed the wall, either from built-in samples or from the backend
fn load_confessions(state: AppState) {
    match state.mode {
        SubmitMode::Local => {
            let now = chrono::Utc::now().timestamp_millis();
            state.store.update(|s| s.seed(sample_confessions(now)));

            // Brief pause so the reveal reads as a fetch
            let loading = state.loading;
            gloo_timers::callback::Timeout::new(LOCAL_REVEAL_MS, move || {
                loading.set(false);
            })
            .forget();
        }
        SubmitMode::Remote => {
            spawn_local(async move {
                match api::fetch_confessions().await {
                    Ok(dtos) => {
                        let now = chrono::Utc::now().timestamp_millis();
                        let confessions: Vec<_> = dtos
                            .into_iter()
                            .map(|dto| dto.into_confession(now))
                            .collect();
                        state.store.update(|s| s.seed(confessions));
                    }
                    Err(e) => {
                        state.show_error(&e);
                    }
                }
                state.loading.set(false);
            });
        }
    }
}

/// Footer component showing wall stats
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let state_for_stats = state.clone();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    "Whispered in confidence. Nothing here is traced back to you."
                </div>

                // Wall totals
                <div class="text-gray-400">
                    {move || {
                        let secrets = state_for_stats.total_confessions();
                        let reactions = state_for_stats.total_reactions();
                        format!("{} secrets · {} reactions", secrets, reactions)
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
