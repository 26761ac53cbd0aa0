//! UI Components
//!
//! Reusable Leptos components for the confession wall.

pub mod compose_modal;
pub mod confession_card;
pub mod confession_grid;
pub mod header;
pub mod sort_bar;
pub mod stars;
pub mod toast;

pub use compose_modal::ComposeModal;
pub use confession_card::ConfessionCard;
pub use confession_grid::ConfessionGrid;
pub use header::Header;
pub use sort_bar::SortBar;
pub use stars::StarField;
pub use toast::Toast;
