//! # viewsync
//!
//! Leptos + WASM view-state glue for a server-rendered page: theme
//! preference, scroll-reactive chrome, and the unread-notification badge.
//!
//! Component logic lives behind small element-handle traits (`dom`) and
//! scheduling traits (`util`) so it runs natively under `cargo test`. The
//! `hydrate` feature adds the `web-sys` adapters and the `boot` layer that
//! binds browser events to the components.

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod net;
pub mod page;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod boot;

/// Browser entry point called by the page loader once the module is fetched.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::ViewConfig::from_page();
    if let Err(e) = boot::mount(&config) {
        leptos::logging::warn!("viewsync mount failed: {e}");
    }
}
