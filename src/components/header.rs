//! Header Component
//!
//! Top bar with branding, wall stats, theme toggle, and the share button.

use leptos::*;

use crate::state::global::AppState;

/// Page header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    // Extract the signals we need
    let theme = state.theme;
    let compose_open = state.compose_open;

    let state_for_count = state.clone();
    let confession_count = Signal::derive(move || state_for_count.total_confessions() as u32);
    let reaction_count = Signal::derive(move || state.total_reactions());

    let toggle_theme = move |_| {
        let next = theme.get().toggled();
        next.store();
        theme.set(next);
    };

    view! {
        <header class="border-b border-gray-700/60 backdrop-blur-sm sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🤫"</span>
                        <div>
                            <span class="text-xl font-bold">"T-Whispers"</span>
                            <p class="text-gray-400 text-xs hidden sm:block">
                                "Anonymous confessions, whispered into the night"
                            </p>
                        </div>
                    </div>

                    // Stats and actions
                    <div class="flex items-center space-x-3">
                        <StatPill label="confessions" value=confession_count />
                        <StatPill label="reactions" value=reaction_count />

                        <button
                            on:click=toggle_theme
                            title="Toggle theme"
                            class="w-10 h-10 rounded-lg bg-gray-700/60 hover:bg-gray-600 transition-colors text-lg"
                        >
                            {move || theme.get().icon()}
                        </button>

                        <button
                            on:click=move |_| compose_open.set(true)
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "+ Share a Secret"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Small counter badge shown in the header
#[component]
fn StatPill(
    label: &'static str,
    #[prop(into)]
    value: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="hidden md:inline-flex items-center space-x-2 bg-gray-700/60 rounded-full px-3 py-1">
            <span class="font-semibold text-sm">{move || value.get()}</span>
            <span class="text-gray-400 text-xs">{label}</span>
        </div>
    }
}
