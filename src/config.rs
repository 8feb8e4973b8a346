//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "static";
pub const DEFAULT_PKG_DIR: &str = "client/pkg";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: PathBuf,
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: directory holding `index.html`, default `static`
    /// - `PKG_DIR`: wasm-bindgen output served at `/pkg`, default `client/pkg`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let site_root = get("SITE_ROOT").map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);
        let pkg_dir = get("PKG_DIR").map_or_else(|| PathBuf::from(DEFAULT_PKG_DIR), PathBuf::from);

        Ok(Self { port, site_root, pkg_dir })
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::Invalid { var: "PORT", value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
