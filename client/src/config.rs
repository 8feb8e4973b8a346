//! Reads [`SiteConfig`] overrides embedded in the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use site::config::SiteConfig;

/// Parse an optional JSON blob, falling back to defaults on any problem.
#[must_use]
pub fn parse_config(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring site config: {err}");
            SiteConfig::default()
        }
    }
}

/// Config from `<script id="site-config" type="application/json">`, if present.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn read_config(document: &web_sys::Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(crate::selectors::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    parse_config(raw.as_deref())
}
