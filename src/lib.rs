//! # incident-desk
//!
//! Leptos + WASM admin dashboard for incident reports. Talks to the
//! backend REST API under `/api` with a bearer token and keeps the
//! signed-in session in `localStorage` across reloads.
//!
//! This crate contains pages, components, application state, and the
//! typed API gateway. The reactive core and all request/session policy
//! build natively so the test suite runs without a browser; the `csr`
//! feature pulls in the WASM-only transport and DOM bindings.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
