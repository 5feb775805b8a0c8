//! # client
//!
//! Leptos + WASM front end for the Ledgerly invoicing product.
//!
//! This crate contains the routed pages, layout components, the session
//! store with its durable storage backends, and the REST helpers used to talk
//! to the business backend. The `ledgerly` host binary renders it on the
//! server (`ssr` feature); the browser bundle hydrates it (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
