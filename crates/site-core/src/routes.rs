//! Route table for the site
//!
//! A fixed, ordered list of literal paths. The first entry whose path equals
//! the requested path wins; anything else resolves to [`Page::NotFound`].

use serde::{Deserialize, Serialize};

/// Every page the site can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Privacy,
    Disclaimer,
    Terms,
    Accessibility,
    NotFound,
}

/// A single route table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

/// The route table, in match order
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        page: Page::Home,
    },
    Route {
        path: "/privacy",
        page: Page::Privacy,
    },
    Route {
        path: "/disclaimer",
        page: Page::Disclaimer,
    },
    Route {
        path: "/terms",
        page: Page::Terms,
    },
    // Older alias of /terms
    Route {
        path: "/legal-notice",
        page: Page::Terms,
    },
    Route {
        path: "/accessibility",
        page: Page::Accessibility,
    },
];

/// Resolve a request path to the page registered for it
pub fn resolve(path: &str) -> Page {
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.page)
        .unwrap_or(Page::NotFound)
}

/// All registered paths in table order
pub fn paths() -> impl Iterator<Item = &'static str> {
    ROUTES.iter().map(|route| route.path)
}

impl Page {
    /// First path registered for this page, `None` for the not-found page
    pub fn canonical_path(self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|route| route.page == self)
            .map(|route| route.path)
    }

    /// HTTP status the server answers with when rendering this page
    pub fn http_status(self) -> u16 {
        match self {
            Page::NotFound => 404,
            _ => 200,
        }
    }

    /// Document title
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "MBLAW | Real Estate Legal Opinion Letters",
            Page::Privacy => "Privacy Policy | MB Law",
            Page::Disclaimer => "Disclaimer | MB Law",
            Page::Terms => "Terms of Use | MB Law",
            Page::Accessibility => "Accessibility | MB Law",
            Page::NotFound => "Page Not Found | MB Law",
        }
    }
}
