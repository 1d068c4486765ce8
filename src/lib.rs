//! # photobooth-ui
//!
//! Leptos + WASM auth frontend for the photo-session application. Replaces
//! the Alpine.js auth page with a Rust-native controller over the backend's
//! REST auth endpoints: local validation, the login/register calls, session
//! token persistence, and the presentational state of the auth page.
//!
//! The controller core (`auth`, `state`) is plain Rust and tested natively;
//! everything that needs a browser (`net::api`, `util`) is gated behind the
//! `hydrate` feature.

pub mod app;
pub mod auth;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
