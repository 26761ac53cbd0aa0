//! Sort Bar Component
//!
//! Ordering control for the confession wall.

use leptos::*;

use crate::state::global::AppState;
use crate::state::store::SortOrder;

/// Sort selector shown above the wall
#[component]
pub fn SortBar() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let sort_order = state.sort_order;

    let state_for_change = state.clone();
    let on_change = move |ev| {
        let order = SortOrder::parse(&event_target_value(&ev));
        state_for_change.set_sort_order(order);
    };

    let on_clear = move |_| state.set_sort_order(SortOrder::default());

    view! {
        <div class="flex items-center justify-between mb-6">
            <div class="flex items-center space-x-3">
                <label class="text-sm text-gray-400">"Sort by"</label>
                <select
                    on:change=on_change
                    prop:value=move || sort_order.get().as_str()
                    class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="newest">"Newest first"</option>
                    <option value="oldest">"Oldest first"</option>
                    <option value="popular">"Most reactions"</option>
                </select>
            </div>

            <button
                on:click=on_clear
                class="text-sm text-gray-400 hover:text-white transition-colors"
            >
                "Clear filters"
            </button>
        </div>
    }
}
