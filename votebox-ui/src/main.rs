//! Votebox Poll Page
//!
//! Single-page voting board built with Leptos (WASM).
//!
//! # Features
//!
//! - Fixed three-candidate poll with party logos
//! - Click-to-vote with instant tally refresh
//! - Live count list and bar chart
//! - English / Bangla display toggle
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Votebox API via HTTP; every vote
//! response carries the updated tally, so the page never polls for counts.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
