//! State Management
//!
//! Global application state, the confession wall model, and theming.

pub mod global;
pub mod store;
pub mod theme;

pub use global::{provide_app_state, AppState};
pub use store::{sample_confessions, time_ago, Confession, ConfessionStore, Reaction, SortOrder};
pub use theme::Theme;
