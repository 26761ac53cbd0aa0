//! Compose Modal Component
//!
//! Dialog for writing and submitting a new confession.

use leptos::*;

use crate::api::{self, SubmitMode};
use crate::state::global::AppState;

/// Maximum confession length enforced by the composer
pub const MAX_LENGTH: usize = 500;

/// Modal dialog for sharing a confession
#[component]
pub fn ComposeModal(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (text, set_text) = create_signal(String::new());
    let submitting = state.submitting;

    let char_count = create_memo(move |_| text.get().chars().count());
    let counter_class = create_memo(move |_| {
        let count = char_count.get();
        if count > 450 {
            "text-orange-400 font-semibold"
        } else if count > 400 {
            "text-yellow-500"
        } else {
            "text-gray-500"
        }
    });

    // Clone on_close for each place it's used
    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close.clone();
    let on_close_for_backdrop = on_close.clone();
    let on_close_for_escape = on_close;

    // Escape closes the dialog; remove the listener with the modal
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close_for_escape();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let trimmed = text.get().trim().to_string();
        if trimmed.is_empty() {
            state.show_warning("Please write something first!");
            return;
        }

        match state.mode {
            SubmitMode::Local => {
                state.submit_local(&trimmed);
                set_text.set(String::new());
                state.show_success("✨ Confession shared successfully!");
                on_close_for_submit();
            }
            SubmitMode::Remote => {
                submitting.set(true);

                let state_clone = state.clone();
                spawn_local(async move {
                    match api::submit_confession(&trimmed).await {
                        Ok(()) => {
                            // Reload so the wall reflects the server's ordering
                            let _ = window().location().reload();
                        }
                        Err(e) => {
                            state_clone.show_error(&e);
                            state_clone.submitting.set(false);
                        }
                    }
                });
            }
        }
    };

    view! {
        <div
            on:click=move |_| on_close_for_backdrop()
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
        >
            <div
                on:click=move |ev| ev.stop_propagation()
                class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4"
            >
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Share a Secret"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <textarea
                            placeholder="What's weighing on you? No one will ever know it was you..."
                            maxlength=MAX_LENGTH
                            rows=5
                            prop:value=move || text.get()
                            on:input=move |ev| set_text.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 resize-none
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <div class="flex justify-between items-center mt-1">
                            <span class="text-gray-500 text-xs">"Shared anonymously"</span>
                            <span class=move || format!("text-xs {}", counter_class.get())>
                                {move || format!("{} / {}", char_count.get(), MAX_LENGTH)}
                            </span>
                        </div>
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-2">
                        <button
                            type="button"
                            on:click=move |_| {
                                set_text.set(String::new());
                                on_close_for_cancel();
                            }
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Sharing..." } else { "Share" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
