//! # client
//!
//! Leptos + WASM frontend for Guildustry.
//!
//! This crate contains pages, components, the browser session store and the
//! REST helpers. Access decisions (route guards, the onboarding router, the
//! profile wizard) come from the `gates` crate; components here only feed
//! them session snapshots and act on what they return.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
