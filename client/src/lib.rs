//! # client
//!
//! Leptos + WASM frontend for customer management: the customer listing and
//! the customer creation form, plus the toast and title-bar chrome they use.
//!
//! Built twice: with `ssr` for server rendering inside the `server` binary,
//! and with `hydrate` as the browser WASM bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
