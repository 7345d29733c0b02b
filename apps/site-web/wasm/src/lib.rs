//! Browser module for the MB Law site
//!
//! The server sends fully rendered HTML; this module adds the runtime
//! behavior on top of it:
//!
//! - the scroll-aware navigation bar (`#site-nav`, home page only)
//! - smooth scrolling for `data-scroll-target` links and buttons
//! - one-shot entrance animations for `data-reveal` elements
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { start } from '/pkg/site_web.js';
//!
//! await init();
//! const site = start();
//! // ...
//! site.unmount(); // detaches every listener and observer
//! ```

pub mod dom;
pub mod nav;
pub mod reveal;
pub mod scroll;

use site_core::render::NAV_ELEMENT_ID;
use site_core::{scroll_to_section, NavState, SectionId};
use wasm_bindgen::prelude::*;

pub use nav::{NavHandle, WindowScroll};
pub use reveal::RevealObserver;
pub use scroll::{DomSections, ScrollLinks};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Everything mounted on the current page
#[wasm_bindgen]
pub struct SiteHandle {
    nav: Option<NavHandle>,
    links: Option<ScrollLinks>,
    reveals: Option<RevealObserver>,
}

#[wasm_bindgen]
impl SiteHandle {
    /// The navigation bar, if this page has one
    #[wasm_bindgen(getter, js_name = navState)]
    pub fn nav_state(&self) -> Option<String> {
        self.nav.as_ref().map(NavHandle::state)
    }

    #[wasm_bindgen(getter, js_name = scrollLinkCount)]
    pub fn scroll_link_count(&self) -> usize {
        self.links.as_ref().map(ScrollLinks::len).unwrap_or(0)
    }

    #[wasm_bindgen(getter, js_name = revealedCount)]
    pub fn revealed_count(&self) -> usize {
        self.reveals
            .as_ref()
            .map(RevealObserver::revealed_count)
            .unwrap_or(0)
    }

    /// Remove every listener and observer attached by `start`
    pub fn unmount(&mut self) {
        if let Some(nav) = self.nav.as_mut() {
            nav.unmount();
        }
        self.nav = None;
        self.links = None;
        self.reveals = None;
    }
}

/// Mount all page behavior on the current document
#[wasm_bindgen]
pub fn start() -> Result<SiteHandle, JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let nav = document
        .get_element_by_id(NAV_ELEMENT_ID)
        .map(|el| NavHandle::mount(&window, el))
        .transpose()?;
    let links = ScrollLinks::bind(&document)?;
    let reveals = RevealObserver::observe(&document)?;

    dom::log(&format!(
        "site-web {} mounted ({} scroll links, nav: {})",
        get_version(),
        links.len(),
        if nav.is_some() { "yes" } else { "no" }
    ));

    Ok(SiteHandle {
        nav,
        links: Some(links),
        reveals: Some(reveals),
    })
}

/// Mount only the scroll-aware navigation bar on the element matching `selector`
#[wasm_bindgen(js_name = mountNavigation)]
pub fn mount_navigation(selector: &str) -> Result<NavHandle, JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let nav = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No element matches {}", selector)))?;
    NavHandle::mount(&window, nav)
}

/// Smoothly scroll to the section with `id`. Returns false, doing nothing,
/// if the page has no such section.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section_by_id(id: &str) -> bool {
    let Ok(document) = dom::window().and_then(|w| dom::document(&w)) else {
        return false;
    };
    scroll_to_section(&DomSections::new(document), &SectionId::new(id))
}

/// Whether the navigation bar is solid at `offset`
#[wasm_bindgen(js_name = navSolidAt)]
pub fn nav_solid_at(offset: f64) -> bool {
    NavState::for_offset(offset).is_solid()
}
