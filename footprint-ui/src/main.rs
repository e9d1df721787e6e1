//! Carbon Footprint Tracker
//!
//! Browser UI for the footprint calculator, built with Leptos (WASM).
//!
//! # Features
//!
//! - Four-field activity form (electricity, gas, car miles, flights)
//! - Result panel comparing against the 2.0 tons CO2e/year ideal
//! - Persisted footprint history with a two-series line chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The calculation engine and history ledger come from the
//! `footprint` crate; history persists to `localStorage`.

use leptos::*;

mod app;
mod components;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
