//! # paradise-pay-client
//!
//! Leptos + WASM front end for the Paradise Pay ticketing application.
//!
//! This crate contains pages, components, application state, network types,
//! and the async list/favorites controllers that back the Discover, Orders,
//! and Dashboard screens. All data comes from the Paradise Pay REST backend;
//! this crate never talks to a database or payment processor directly.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: initialize logging and mount the application.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
