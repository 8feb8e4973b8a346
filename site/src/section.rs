//! Section identifiers, the declared catalog and page titles.
//!
//! Sections are authored in the markup and never change at runtime. The host
//! scans `main > .section` once at start-up and hands the ids to
//! [`SectionCatalog::new`]; the testimonials block is excluded because its
//! visibility is derived from the current section rather than routed to.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TITLE;

/// Name of a routable section; equal to the section element's `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.0 == crate::consts::HOME_SECTION
    }

    /// Document title shown while this section is visible.
    #[must_use]
    pub fn title(&self) -> &'static str {
        title_for(&self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static name → title map, falling back to [`DEFAULT_TITLE`].
#[must_use]
pub fn title_for(name: &str) -> &'static str {
    match name {
        "about" => "About Us - Ketolize",
        "services" => "Our Services - Ketolize",
        "recipes" => "Keto Recipes - Ketolize",
        "blog" => "Blog - Ketolize",
        "contact" => "Contact Us - Ketolize",
        "booking" => "Book Consultation - Ketolize",
        _ => DEFAULT_TITLE,
    }
}

/// The fixed, ordered set of sections declared in the page.
#[derive(Debug, Clone, Default)]
pub struct SectionCatalog {
    sections: Vec<SectionId>,
}

impl SectionCatalog {
    /// Build a catalog from declared names, dropping blanks and duplicates
    /// while keeping document order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections: Vec<SectionId> = Vec::new();
        for name in names {
            let name = name.into();
            let name = name.trim();
            if name.is_empty() || sections.iter().any(|s| s.as_str() == name) {
                continue;
            }
            sections.push(SectionId::new(name));
        }
        Self { sections }
    }

    /// Look up a declared section by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SectionId> {
        self.sections.iter().find(|s| s.as_str() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
