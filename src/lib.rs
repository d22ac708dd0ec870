//! # milktea-client
//!
//! Leptos + WASM storefront client for the milk-tea shop: public landing,
//! login, customer account, and the role-gated back-office dashboard.
//!
//! The `guard` module owns access control: a pure decision core plus a thin
//! adapter that applies hint persistence, session resets, denial toasts, and
//! redirects.

pub mod app;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
