//! # tabs-client
//!
//! Leptos + WASM frontend for the shared-expenses application.
//!
//! This crate owns the client-side route table and the auth gate in front
//! of it: every navigation asks the session backend who is signed in, then
//! proceeds, sends anonymous visitors to `/login`, or sends signed-in users
//! away from it.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = option_env!("LOG_LEVEL")
        .and_then(|raw| raw.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
