//! Smooth scrolling to in-page sections
//!
//! Links and call-to-action buttons name a section by id. If the current
//! page has no such section the request is dropped silently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable label of a scroll target within a page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a navigation label: lowercase, whitespace runs
    /// collapsed to a single hyphen
    pub fn from_label(label: &str) -> Self {
        let slug = label
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// In-page anchor, e.g. `#contact`
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How the viewport should move to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A page that can locate sections and scroll to them
pub trait SectionLookup {
    type Section;

    fn find_section(&self, id: &SectionId) -> Option<Self::Section>;

    fn scroll_into_view(&self, section: &Self::Section, behavior: ScrollBehavior);
}

/// Smoothly scroll to `id`. Returns `false` without side effects when the
/// page has no such section.
pub fn scroll_to_section<D: SectionLookup>(doc: &D, id: &SectionId) -> bool {
    match doc.find_section(id) {
        Some(section) => {
            doc.scroll_into_view(&section, ScrollBehavior::Smooth);
            true
        }
        None => {
            tracing::debug!(section = %id, "scroll target missing, ignoring");
            false
        }
    }
}
