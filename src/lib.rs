//! # tourguide-client
//!
//! Leptos + WASM frontend for the Tourism Guide System. Replaces the
//! string-templating `static/js` layer with a Rust-native UI layer.
//!
//! This crate contains pages, components, the client-side session mirror,
//! network types, and the REST helpers used to talk to the guide API. The
//! session mirror keeps a local snapshot of the server-confirmed login state
//! and drives the navigation bar and the admin-only pages from it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
