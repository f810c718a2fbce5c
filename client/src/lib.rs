//! # gymtrack-client
//!
//! Leptos + WASM frontend for the gym-tracking application: exercise
//! catalog, workout plans, session logging, progress, and account settings
//! on top of a REST backend.
//!
//! The crate builds twice. With `ssr` it is linked into `gymtrack-server`
//! to render pages; with `hydrate` it compiles to WASM and takes over the
//! server-rendered markup in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
