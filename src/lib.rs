//! # storefront
//!
//! Leptos + WASM frontend for the wholesale marketplace: the catalog and
//! listing pages, the product chat widget, and the sitewide page
//! enhancements (tooltips/popovers, alert dismissal, active-nav marking,
//! image preview).
//!
//! A host server mounts [`app::shell`] for SSR; browsers enter through
//! [`hydrate`].

pub mod app;
pub mod catalog;
pub mod components;
pub mod enhance;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: set up panic reporting and console logging, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
