//! # smartbank-web
//!
//! Leptos + WASM frontend for the SmartBank retail-banking service.
//!
//! This crate contains pages, components, the browser session, REST types,
//! and the route guards that steer a visitor through onboarding (signup,
//! KYC, account creation) before the dashboard. All balances, transfers,
//! limits, and authorization decisions belong to the backend; the client only
//! renders forms and reacts to response shape.

pub mod app;
pub mod components;
pub mod config;
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
