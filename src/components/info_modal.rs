//! Informational Modal
//!
//! One-time welcome dialog. Opens on mount, closes permanently for the
//! session via the close button or a backdrop click.

use leptos::*;

/// Welcome modal component
#[component]
pub fn InfoModal() -> impl IntoView {
    let (open, set_open) = create_signal(true);

    view! {
        {move || {
            if open.get() {
                view! {
                    <div
                        class="fixed inset-0 bg-black/50 flex items-center justify-center z-40"
                        on:click=move |_| set_open.set(false)
                    >
                        // Clicks inside the panel must not dismiss the modal
                        <div
                            class="relative bg-gray-800 rounded-xl p-6 w-full max-w-lg mx-4 shadow-xl"
                            on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                        >
                            <button
                                on:click=move |_| set_open.set(false)
                                class="absolute top-3 right-3 text-gray-400 hover:text-white"
                            >
                                "✕"
                            </button>

                            <h2 class="text-xl font-semibold mb-4">
                                "Welcome to the Chemistry Lab Inventory System"
                            </h2>
                            <p class="text-gray-300">
                                "This program was created to help manage the inventory of \
                                 chemicals, glassware, and equipment in a chemistry lab. You can \
                                 add, delete, and view items in the inventory. The data is backed \
                                 up regularly to ensure nothing is lost."
                            </p>
                        </div>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
