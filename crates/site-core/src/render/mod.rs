//! HTML rendering
//!
//! Pages are pure functions of a [`SiteContent`] record. The home page is a
//! fixed sequence of sections; legal pages share one header/content/footer
//! shell; unknown paths get the not-found page.

pub mod home;
pub mod html;
pub mod layout;
pub mod legal;

use crate::content::SiteContent;
use crate::legal::LegalDocument;
use crate::routes::{self, Page};

pub use home::NAV_ELEMENT_ID;

/// Render a complete HTML document for `page`
pub fn render_page(page: Page, content: &SiteContent) -> String {
    let body = match page {
        Page::Home => home::body(content),
        Page::NotFound => legal::not_found_body(content),
        _ => match LegalDocument::for_page(page, &content.firm) {
            Some(doc) => legal::body(&doc, content),
            None => legal::not_found_body(content),
        },
    };
    let body_class = match page {
        Page::Home => "page page--home",
        Page::NotFound => "page page--not-found",
        _ => "page page--legal",
    };
    layout::document(page.title(), body_class, &body)
}

/// Resolve `path` through the route table and render the result
pub fn render_path(path: &str, content: &SiteContent) -> (Page, String) {
    let page = routes::resolve(path);
    (page, render_page(page, content))
}
