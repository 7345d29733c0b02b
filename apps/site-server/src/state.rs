//! Shared application state
//!
//! Content never changes after startup, so every page is rendered once here
//! and handlers only look the result up.

use std::collections::HashMap;
use std::sync::Arc;

use site_core::{render_page, Page, SiteContent};

const ALL_PAGES: [Page; 6] = [
    Page::Home,
    Page::Privacy,
    Page::Disclaimer,
    Page::Terms,
    Page::Accessibility,
    Page::NotFound,
];

#[derive(Clone)]
pub struct AppState {
    pages: Arc<HashMap<Page, Arc<str>>>,
}

impl AppState {
    pub fn new(content: &SiteContent) -> Self {
        let pages = ALL_PAGES
            .iter()
            .map(|page| {
                let html: Arc<str> = render_page(*page, content).into();
                tracing::debug!(?page, bytes = html.len(), "rendered page");
                (*page, html)
            })
            .collect();

        Self {
            pages: Arc::new(pages),
        }
    }

    /// Pre-rendered document for `page`
    pub fn page(&self, page: Page) -> Arc<str> {
        // Every variant is rendered in `new`
        self.pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_every_page() {
        let state = AppState::new(&SiteContent::default());
        assert_eq!(state.page_count(), ALL_PAGES.len());
        for page in ALL_PAGES {
            assert!(state.page(page).starts_with("<!DOCTYPE html>"), "{:?}", page);
        }
    }
}
