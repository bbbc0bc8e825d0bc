//! # client
//!
//! Leptos + WASM frontend for the gigboard freelance marketplace.
//!
//! This crate owns the browser auth store, the route guards that wrap every
//! page, and the route tree. Access decisions themselves live in the
//! `access` crate so the server's edge middleware reaches the same answers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
