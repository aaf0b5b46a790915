//! # storefront
//!
//! Leptos + WASM storefront UI for a product-catalog REST backend.
//!
//! This crate contains pages, components, application state, and the
//! typed HTTP client for the auth and catalog endpoints. It compiles to
//! WASM for the browser (the `csr` feature) and natively for tests,
//! where the browser-facing modules fall back to inert stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log forwarding to the console and
/// mounts [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
