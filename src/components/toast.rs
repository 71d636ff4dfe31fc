//! Toast Notification Component
//!
//! Transient success/error feedback driven by [`GlobalState`]. Messages
//! clear themselves; this component only renders whatever is currently set.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg success=true />
                })
            }}
            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg success=false />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    success: bool,
) -> impl IntoView {
    let (icon, bg_class) = if success {
        ("✓", "bg-green-600")
    } else {
        ("✕", "bg-red-600")
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
