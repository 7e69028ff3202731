//! # library-web
//!
//! Leptos + WASM frontend for the book-library service.
//!
//! This crate owns the browser side of authentication: the persisted bearer
//! token, local expiry checks, the `/auth/*` client, the session manager that
//! every page observes, and the route guard that keeps protected pages behind
//! a verified session. Pages and components sit on top of that core.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
