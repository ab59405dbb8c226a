//! # nextup-client
//!
//! Leptos + WASM frontend for the NextUp song-bidding application.
//! Replaces the SvelteKit client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the
//! REST adapters for the hosted Firebase backend (identity-toolkit auth
//! and the Firestore document store).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
