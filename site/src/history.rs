//! History entries pushed on every section change.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use crate::consts::HOME_SECTION;
use crate::section::SectionId;

/// State payload stored with each entry: `{"section": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub section: SectionId,
}

impl HistoryState {
    /// Parse the JSON form of a popped state object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a state object.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Section to restore for a popped entry, `home` when none was carried.
    #[must_use]
    pub fn section_or_home(state: Option<&Self>) -> SectionId {
        state.map_or_else(|| SectionId::new(HOME_SECTION), |s| s.section.clone())
    }
}

/// One `pushState` call: state, title and URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub state: HistoryState,
    pub title: String,
    pub url: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn for_section(section: &SectionId) -> Self {
        Self {
            state: HistoryState { section: section.clone() },
            title: section.title().to_owned(),
            url: url_for(section),
        }
    }
}

/// `/` for home, `/#<name>` for everything else.
#[must_use]
pub fn url_for(section: &SectionId) -> String {
    if section.is_home() { "/".to_owned() } else { format!("/#{section}") }
}
