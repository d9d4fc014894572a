//! # apptrack
//!
//! Leptos + WASM front-end for the job-application tracker backend.
//!
//! This crate contains the route-level pages (login, applications),
//! reusable components, shared client state, and the REST layer that talks
//! to the externally-hosted API. It builds both as a hydrating browser
//! bundle (`hydrate` feature) and as a server-rendered shell (`ssr`
//! feature).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point — installs the panic hook and console logger, then
/// hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
