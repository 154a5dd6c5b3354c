//! Market State Analysis client
//!
//! Single-page market-analysis client built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Routing is owned by the `market_state` navigator: link clicks and
//! history pop events go through it, and its render callback feeds the
//! signal the outlet renders from.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
