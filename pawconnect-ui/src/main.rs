//! PawConnect Web
//!
//! City-aware pet community demo built with Leptos (WASM).
//!
//! # Features
//!
//! - City selection persisted in local storage, with city-themed styling
//! - Service directory with search, category filters, sorting and paging
//! - Info hub articles per city
//! - Profile page with an in-session pet roster
//! - Landing page: feature voting, feedback form, testimonials, counters
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All filtering, validation and voting rules live in the
//! `pawconnect` crate; this crate only renders them. The dataset is bundled
//! and optionally refreshed from the PawConnect server.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route core `tracing` events to the browser console
    tracing_wasm::set_as_global_default();

    mount_to_body(|| view! { <app::App /> });
}
