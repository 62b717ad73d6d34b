//! # client
//!
//! Leptos + WASM frontend for Briefly: a landing page and a simulated
//! workflow for connecting chat, document, and code-hosting services and
//! generating three-section team briefs.
//!
//! The crate contains pages, components, session and view-local state, the
//! data-provider seam, and the cancellable deferrals that stand in for real
//! asynchronous work. It renders on the server under the `ssr` feature and
//! hydrates in the browser under `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
