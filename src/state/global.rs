//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::{get_submit_mode, SubmitMode};
use crate::state::store::{ConfessionStore, Reaction, SortOrder};
use crate::state::theme::Theme;

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// The confession wall, kept in display order
    pub store: RwSignal<ConfessionStore>,
    /// Active sort criterion
    pub sort_order: RwSignal<SortOrder>,
    /// Active color theme
    pub theme: RwSignal<Theme>,
    /// Where submissions go (decided once at startup)
    pub mode: SubmitMode,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Whether the compose dialog is open
    pub compose_open: RwSignal<bool>,
    /// Submission in flight
    pub submitting: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Validation warning (for toasts)
    pub warning: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        store: create_rw_signal(ConfessionStore::new()),
        sort_order: create_rw_signal(SortOrder::default()),
        theme: create_rw_signal(Theme::load()),
        mode: get_submit_mode(),
        loading: create_rw_signal(true),
        compose_open: create_rw_signal(false),
        submitting: create_rw_signal(false),
        error: create_rw_signal(None),
        warning: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Number of confessions on the wall
    pub fn total_confessions(&self) -> usize {
        self.store.with(|s| s.len())
    }

    /// Reactions summed across every confession
    pub fn total_reactions(&self) -> u32 {
        self.store.with(|s| s.total_reactions())
    }

    /// Add a confession to the top of the wall, then re-apply the
    /// active sort. Returns false when the text is blank.
    pub fn submit_local(&self, text: &str) -> bool {
        let now = chrono::Utc::now().timestamp_millis();
        let order = self.sort_order.get_untracked();
        let mut added = false;
        self.store.update(|s| {
            added = s.prepend(text, now);
            if added {
                s.sort(order);
            }
        });
        added
    }

    /// Bump one reaction counter on the card at `index`
    pub fn react(&self, index: usize, kind: Reaction) {
        self.store.update(|s| {
            s.react(index, kind);
        });
    }

    /// Switch the sort criterion and reorder the wall
    pub fn set_sort_order(&self, order: SortOrder) {
        self.sort_order.set(order);
        self.store.update(|s| s.sort(order));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Show a validation warning (auto-clears after timeout)
    pub fn show_warning(&self, message: &str) {
        self.warning.set(Some(message.to_string()));

        let warning_signal = self.warning;
        gloo_timers::callback::Timeout::new(4000, move || {
            warning_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::sample_confessions;

    fn test_state() -> AppState {
        AppState {
            store: create_rw_signal(ConfessionStore::new()),
            sort_order: create_rw_signal(SortOrder::default()),
            theme: create_rw_signal(Theme::default()),
            mode: SubmitMode::Local,
            loading: create_rw_signal(false),
            compose_open: create_rw_signal(false),
            submitting: create_rw_signal(false),
            error: create_rw_signal(None),
            warning: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    #[test]
    fn test_submit_local_prepends() {
        let runtime = create_runtime();

        let state = test_state();
        assert!(state.submit_local("  first secret  "));
        assert!(state.submit_local("second secret"));

        assert_eq!(state.total_confessions(), 2);
        state.store.with(|s| {
            assert_eq!(s.confessions()[0].text, "second secret");
            assert_eq!(s.confessions()[1].text, "first secret");
        });

        runtime.dispose();
    }

    #[test]
    fn test_submit_local_rejects_blank() {
        let runtime = create_runtime();

        let state = test_state();
        assert!(!state.submit_local("   "));
        assert_eq!(state.total_confessions(), 0);

        runtime.dispose();
    }

    #[test]
    fn test_submit_respects_active_sort() {
        let runtime = create_runtime();

        let state = test_state();
        state.store.update(|s| s.seed(sample_confessions(1_700_000_000_000)));
        state.set_sort_order(SortOrder::Oldest);

        state.submit_local("fresh confession");

        // The newest entry must land at the bottom under oldest-first.
        state.store.with(|s| {
            assert_eq!(
                s.confessions().last().map(|c| c.text.as_str()),
                Some("fresh confession")
            );
        });

        runtime.dispose();
    }

    #[test]
    fn test_react_updates_totals() {
        let runtime = create_runtime();

        let state = test_state();
        state.submit_local("reactable");
        assert_eq!(state.total_reactions(), 0);

        state.react(0, Reaction::Heart);
        state.react(0, Reaction::Heart);
        state.react(0, Reaction::Laugh);
        assert_eq!(state.total_reactions(), 3);

        runtime.dispose();
    }
}
