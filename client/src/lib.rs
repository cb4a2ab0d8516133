//! # client
//!
//! Leptos frontend for the GearGuard maintenance dashboard.
//!
//! The crate renders an authentication gate and nine feature screens inside
//! one shell. Record lists, filters, entry forms, and delete confirmation all
//! come from the `records` crate; this crate wires them to signals and markup.
//! It compiles natively (tests, SSR) and to WASM under the `hydrate` feature.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
