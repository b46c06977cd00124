//! # career-compass-client
//!
//! Leptos + WASM frontend for the Career Compass career-services portal.
//!
//! This crate contains the company header, the student sidebar, the event
//! form, the sign-in page, and the identity view-model that keeps the header
//! in sync with the hosted auth backend. The `hydrate` feature builds the
//! browser bundle; `ssr` builds the half rendered by `career-compass-server`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
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
