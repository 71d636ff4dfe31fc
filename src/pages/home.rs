//! Home Page
//!
//! Static welcome panel.

use leptos::*;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">
                "Welcome to the Chemistry Lab Inventory System"
            </h1>
            <p class="text-gray-400">
                "Use the navigation bar to view and manage chemicals, glassware, and equipment."
            </p>
        </div>
    }
}
