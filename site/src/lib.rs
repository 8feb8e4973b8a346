//! Interaction core for the Ketolize marketing site.
//!
//! This crate holds every piece of page behavior that does not need a browser:
//! which section is visible, whether the mobile menu or the "not found" modal
//! is open, form validation, banner lifetimes and the timers that drive them.
//! The `client` crate owns the DOM. It forwards raw events to
//! [`engine::SiteCore`] and applies the returned [`action::Action`]s, so every
//! state transition can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::SiteCore`], the injectable [`engine::UiState`] and timer dispatch |
//! | [`router`] | Section switching, nav highlighting and history entries |
//! | [`menu`] | Mobile menu open/close and the debounced resize close |
//! | [`modal`] | "Not found" modal open/close |
//! | [`submit`] | Form submit/blur/input handling, busy state and banners |
//! | [`form`] | Declarative field rules, email shape check and [`form::Submission`] |
//! | [`section`] | Section identifiers, the declared catalog and page titles |
//! | [`history`] | History entries and the state payload they carry |
//! | [`schedule`] | Keyed one-shot timers with supersede/cancel semantics |
//! | [`action`] | Instructions returned to the host |
//! | [`config`] | Tunable timings, breakpoint and submission mode |
//! | [`consts`] | Default values shared by the config and the host |
//! | [`error`] | Crate error type |

pub mod action;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod form;
pub mod history;
pub mod menu;
pub mod modal;
pub mod router;
pub mod schedule;
pub mod section;
pub mod submit;

pub use error::SiteError;

#[cfg(test)]
#[path = "harness_test.rs"]
mod harness;
