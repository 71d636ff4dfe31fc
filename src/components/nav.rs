//! Navigation Component
//!
//! Header navigation bar with section links and the backup download button.

use leptos::*;
use leptos_router::*;

use crate::config;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    // Full-page navigation, deliberately not routed through the API client:
    // the browser handles the file download itself.
    let download_backup = move |_| {
        if let Err(e) = window().location().set_href(&config::backup_url()) {
            log::error!("Backup download navigation failed: {:?}", e);
        }
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🧪"</span>
                        <span class="text-xl font-bold text-white">"LabStock"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/chemicals" label="Chemicals" />
                        <NavLink href="/glassware" label="Glassware" />
                        <NavLink href="/equipment" label="Equipment" />
                    </div>

                    // Backup download
                    <button
                        on:click=download_backup
                        title="Download Backup"
                        class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-gray-200 transition-colors"
                    >
                        "⬇ Backup"
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
