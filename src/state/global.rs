//! Global Application State
//!
//! Toast feedback shared across all pages. Each list view owns its own rows;
//! the only cross-cutting state is the pair of transient messages.

use leptos::*;

use crate::config;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        success: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        let message = message.to_string();
        self.success.set(Some(message.clone()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(config::SUCCESS_TOAST_MS, move || {
            let _ = success_signal.try_update(|slot| clear_if_current(slot, &message));
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        let message = message.to_string();
        self.error.set(Some(message.clone()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(config::ERROR_TOAST_MS, move || {
            let _ = error_signal.try_update(|slot| clear_if_current(slot, &message));
        })
        .forget();
    }
}

/// Clear the slot only if it still holds the message this timer was armed
/// with; a newer toast keeps its own full display window.
fn clear_if_current(slot: &mut Option<String>, shown: &str) {
    if slot.as_deref() == Some(shown) {
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_message_is_cleared() {
        let mut slot = Some("Changes saved!".to_string());
        clear_if_current(&mut slot, "Changes saved!");
        assert_eq!(slot, None);
    }

    #[test]
    fn newer_message_survives_earlier_timer() {
        let mut slot = Some("Flask has been added!".to_string());
        clear_if_current(&mut slot, "Changes saved!");
        assert_eq!(slot.as_deref(), Some("Flask has been added!"));
    }

    #[test]
    fn already_cleared_slot_stays_empty() {
        let mut slot: Option<String> = None;
        clear_if_current(&mut slot, "Changes saved!");
        assert_eq!(slot, None);
    }
}
