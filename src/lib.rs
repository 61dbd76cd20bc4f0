//! # homeprotect
//!
//! Leptos + WASM frontend for the Home Protection service-booking site:
//! public marketing pages, email/password authentication against a hosted
//! backend, and role-scoped dashboards for admins, staff, and customers.
//!
//! The heart of the crate is the session reconciliation controller
//! ([`net::session`]) and the role-based route gate ([`state::gate`] +
//! [`components::route_gate`]); everything else is page chrome around them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
