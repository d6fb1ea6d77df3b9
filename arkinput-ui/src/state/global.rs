//! Global Application State
//!
//! Reactive state shared by every view using Leptos signals.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::bridge::BridgeError;

const SUCCESS_TIMEOUT_MS: u32 = 3_000;
const ERROR_TIMEOUT_MS: u32 = 5_000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Number of in-flight bridge calls
    pub pending: RwSignal<u32>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Cleared once a call finds no desktop host to talk to
    pub bridge_available: RwSignal<bool>,
    /// Expiry of the current toast; replacing it cancels the old timer
    success_timer: StoredValue<Option<Timeout>>,
    error_timer: StoredValue<Option<Timeout>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState::new();
    provide_context(state);
    state
}

/// Fetch the global state; only valid below [`crate::app::App`]
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            pending: create_rw_signal(0),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            bridge_available: create_rw_signal(true),
            success_timer: store_value(None),
            error_timer: store_value(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.get() > 0
    }

    /// Mark a bridge call as started
    pub fn begin(&self) {
        self.pending.update(|n| *n += 1);
    }

    /// Mark a bridge call as finished
    pub fn end(&self) {
        self.pending.update(|n| *n = n.saturating_sub(1));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        self.success_timer.set_value(Some(Timeout::new(SUCCESS_TIMEOUT_MS, move || {
            success_signal.set(None);
        })));
    }

    /// Show an error message (auto-clears after timeout) and log it
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        self.error_timer.set_value(Some(Timeout::new(ERROR_TIMEOUT_MS, move || {
            error_signal.set(None);
        })));
    }

    pub fn clear_error(&self) {
        self.error_timer.set_value(None);
        self.error.set(None);
    }

    /// Report a failed bridge call.
    ///
    /// A missing bridge is shown once as a banner instead of a toast per call.
    pub fn report(&self, context: &str, err: &BridgeError) {
        if err.is_unavailable() {
            if self.bridge_available.get_untracked() {
                web_sys::console::warn_1(&format!("{context}: {err}").into());
                self.bridge_available.set(false);
            }
        } else {
            self.show_error(&format!("{context}: {err}"));
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_follows_pending_calls() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        assert!(!state.is_loading());

        state.begin();
        state.begin();
        state.end();
        assert!(state.is_loading());

        state.end();
        assert!(!state.is_loading());

        // Unbalanced end never underflows
        state.end();
        assert_eq!(state.pending.get_untracked(), 0);

        runtime.dispose();
    }
}
