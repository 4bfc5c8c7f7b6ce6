//! Live channel chat client backed by the record store's live-query gateway.
//!
//! ARCHITECTURE
//! ============
//! `net` talks to the store (REST + live socket), `state` holds the shared
//! view state, `components` render it, and `app` wires the three together.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// Browser entry point: attach the app to the gateway-served shell page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
