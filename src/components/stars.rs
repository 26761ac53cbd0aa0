//! Star Field Component
//!
//! Decorative twinkling background behind the wall.

use leptos::*;

use crate::state::global::AppState;

/// Number of stars scattered across the backdrop
const STAR_COUNT: usize = 300;

/// Fixed star backdrop, regenerated when the theme changes
#[component]
pub fn StarField() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let theme = state.theme;

    view! {
        <div class="stars" aria-hidden="true">
            {move || {
                // Re-scatter the sky on theme change
                let _ = theme.get();

                (0..STAR_COUNT).map(|_| {
                    let roll = js_sys::Math::random();
                    let size_class = if roll < 0.7 {
                        "star-small"
                    } else if roll < 0.9 {
                        "star-medium"
                    } else {
                        "star-large"
                    };

                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
                        js_sys::Math::random() * 100.0,
                        js_sys::Math::random() * 100.0,
                        js_sys::Math::random() * 3.0,
                        2.0 + js_sys::Math::random() * 2.0,
                    );

                    view! {
                        <div class=format!("star {}", size_class) style=style />
                    }
                }).collect_view()
            }}
        </div>
    }
}
