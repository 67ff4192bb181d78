//! # taskboard-client
//!
//! Leptos + WASM frontend for the kanban task board application. Renders
//! boards, lists, and tasks; all persistence, authorization, and business
//! logic live behind the REST API.
//!
//! This crate contains pages, components, per-resource application state,
//! wire types, and the bearer-token HTTP client. Browser-only code is gated
//! behind the `hydrate` feature so the crate also compiles natively for SSR
//! shell rendering and for the unit-test suite.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
