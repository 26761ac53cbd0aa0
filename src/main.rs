//! T-Whispers
//!
//! Anonymous confession wall built with Leptos (WASM).
//!
//! # Features
//!
//! - Masonry-style wall of anonymous confessions
//! - Emoji reactions with live counts
//! - Sorting by age or popularity
//! - Dark and light night-sky themes
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Out of the box it runs against built-in sample data; flip the
//! stored submit mode to `remote` and it talks to the confession API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
