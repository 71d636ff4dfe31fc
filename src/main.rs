//! LabStock
//!
//! Chemistry lab inventory manager built with Leptos (WASM).
//!
//! # Features
//!
//! - Chemicals, glassware, and equipment collections backed by a REST API
//! - Inline-editable data grids with sorting and client-side paging
//! - Safety-data-sheet links for known chemicals
//! - One-click backup download
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every screen follows the same shape: fetch a collection on
//! mount, render it in a grid, submit create/update/delete requests, and
//! confirm each mutation with a toast.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Debug);

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
