//! Tunable timings, breakpoint and submission mode.
//!
//! Every field is optional in the JSON form; anything omitted keeps the value
//! from [`crate::consts`]. The host reads the JSON from an inline
//! `<script id="site-config" type="application/json">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::SiteError;
use crate::consts::{
    BANNER_LIFETIME_MS, DEFAULT_LOG_LEVEL, ENTRANCE_CLEANUP_MS, ENTRANCE_DELAY_MS, MENU_BREAKPOINT_PX,
    RESIZE_DEBOUNCE_MS, SIMULATED_SUBMIT_LATENCY_MS,
};

/// Where validated submissions go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SubmitMode {
    /// Fixed delay, always succeeds. Nothing leaves the page.
    Simulated {
        #[serde(default = "default_submit_latency")]
        latency_ms: u32,
    },
    /// POST the submission as JSON to `url`.
    Endpoint { url: String },
}

impl Default for SubmitMode {
    fn default() -> Self {
        Self::Simulated { latency_ms: SIMULATED_SUBMIT_LATENCY_MS }
    }
}

fn default_submit_latency() -> u32 {
    SIMULATED_SUBMIT_LATENCY_MS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    pub entrance_delay_ms: u32,
    pub entrance_cleanup_ms: u32,
    pub banner_lifetime_ms: u32,
    pub submit: SubmitMode,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_breakpoint_px: MENU_BREAKPOINT_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            entrance_delay_ms: ENTRANCE_DELAY_MS,
            entrance_cleanup_ms: ENTRANCE_CLEANUP_MS,
            banner_lifetime_ms: BANNER_LIFETIME_MS,
            submit: SubmitMode::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config blob.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ConfigParse`] for malformed JSON and
    /// [`SiteError::InvalidConfig`] for values that fail [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the core cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SiteError> {
        if !self.menu_breakpoint_px.is_finite() || self.menu_breakpoint_px <= 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "menu_breakpoint_px must be a positive number, got {}",
                self.menu_breakpoint_px
            )));
        }
        if let SubmitMode::Endpoint { url } = &self.submit {
            if url.trim().is_empty() {
                return Err(SiteError::InvalidConfig("submit endpoint url is empty".into()));
            }
        }
        if log::LevelFilter::from_str(&self.log_level).is_err() {
            return Err(SiteError::InvalidConfig(format!("unknown log_level `{}`", self.log_level)));
        }
        Ok(())
    }

    /// Parsed log level; `info` if the stored name does not parse.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }
}
