//! # starter-client
//!
//! Leptos + WASM single-page client for the starter application:
//! username/password login, signup with email confirmation, and a
//! token-gated dashboard with a small items list. The backend is an
//! external REST service; everything here is the client side of that
//! contract — the session state machine, the HTTP gateway, the route
//! guard, and a thin page layer.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point — mounts the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
