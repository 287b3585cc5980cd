//! # spark-client
//!
//! Leptos + WASM frontend for the SalesSpark sales dashboard.
//!
//! Every view asks the backend HTTP API for data and renders the answer. The
//! crate holds the pages and components, the persisted counters and chat
//! state, typed request/response contracts, and the keyed refresh layer that
//! sequences requests so the newest one always wins.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hook up logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
