//! # client
//!
//! WASM host for the Ketolize site. The markup is static; this crate scans it
//! once, forwards DOM events to [`site::engine::SiteCore`] and applies the
//! returned actions to the document.
//!
//! Browser glue (`web-sys`, timers, fetch) is compiled only with the
//! `hydrate` feature. The remaining modules are plain Rust and are tested
//! natively.

pub mod config;
pub mod error;
pub mod selectors;
pub mod style;
pub mod wiring;

#[cfg(feature = "hydrate")]
pub mod apply;
#[cfg(feature = "hydrate")]
pub mod host;
#[cfg(feature = "hydrate")]
pub mod page;
#[cfg(feature = "hydrate")]
pub mod reveal;
#[cfg(feature = "hydrate")]
pub mod submit;

/// WASM entry point, run once the module is instantiated.
///
/// The bundle is loaded from a module script at the end of `<body>`, so the
/// document is fully parsed by the time this runs.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str("logger already initialised"));
    }
    match host::boot() {
        Ok(()) => log::info!("ketolize client ready"),
        Err(err) => log::error!("client boot failed: {err}"),
    }
}
