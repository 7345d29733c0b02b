//! Smooth-scroll links and buttons

use site_core::scroll::ScrollBehavior;
use site_core::{scroll_to_section, SectionId, SectionLookup};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollIntoViewOptions};

use crate::dom;

/// Attribute naming the section a link or button scrolls to
pub const SCROLL_TARGET_ATTR: &str = "data-scroll-target";

/// Sections of the live document
pub struct DomSections {
    document: Document,
}

impl DomSections {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl SectionLookup for DomSections {
    type Section = Element;

    fn find_section(&self, id: &SectionId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }

    fn scroll_into_view(&self, section: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

type ClickListener = Closure<dyn FnMut(Event)>;

/// Click handlers attached to every `data-scroll-target` element.
/// Dropping the bindings removes the handlers.
pub struct ScrollLinks {
    bindings: Vec<(Element, ClickListener)>,
}

impl ScrollLinks {
    pub fn bind(document: &Document) -> Result<Self, JsValue> {
        let selector = format!("[{}]", SCROLL_TARGET_ATTR);
        let mut bindings = Vec::new();

        for el in dom::query_document(document, &selector)? {
            let Some(target) = el.get_attribute(SCROLL_TARGET_ATTR) else {
                continue;
            };
            let id = SectionId::new(target);
            let sections = DomSections::new(document.clone());
            let listener = ClickListener::new(move |event: Event| {
                if scroll_to_section(&sections, &id) {
                    event.prevent_default();
                }
            });
            el.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            bindings.push((el, listener));
        }

        Ok(Self { bindings })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Drop for ScrollLinks {
    fn drop(&mut self) {
        for (el, listener) in self.bindings.drain(..) {
            let _ = el.remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        dom::document(&dom::window().unwrap()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_missing_section_is_noop() {
        let sections = DomSections::new(document());
        assert!(!scroll_to_section(&sections, &SectionId::new("no-such-section")));
    }

    #[wasm_bindgen_test]
    fn test_existing_section_scrolls() {
        let document = document();
        let section = document.create_element("section").unwrap();
        section.set_id("wasm-test-section");
        document.body().unwrap().append_child(&section).unwrap();

        let sections = DomSections::new(document);
        assert!(scroll_to_section(&sections, &SectionId::new("wasm-test-section")));
    }

    #[wasm_bindgen_test]
    fn test_bind_counts_scroll_targets() {
        let document = document();
        let holder = document.create_element("div").unwrap();
        holder.set_inner_html(r##"<a href="#x" data-scroll-target="x">X</a><button data-scroll-target="y">Y</button>"##);
        document.body().unwrap().append_child(&holder).unwrap();

        let links = ScrollLinks::bind(&document).unwrap();
        assert!(links.len() >= 2);
    }

    fn cancelable_click() -> Event {
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_cta_click_scrolls_only_when_contact_exists() {
        let document = document();
        let body = document.body().unwrap();
        let holder = document.create_element("div").unwrap();
        holder.set_inner_html(
            r#"<button type="button" id="cta-under-test" data-scroll-target="contact">Contact</button>"#,
        );
        body.append_child(&holder).unwrap();
        let button = document.get_element_by_id("cta-under-test").unwrap();

        let links = ScrollLinks::bind(&document).unwrap();
        assert!(!links.is_empty());

        // No #contact on the page yet: the click is left alone
        assert!(document.get_element_by_id("contact").is_none());
        let click = cancelable_click();
        button.dispatch_event(&click).unwrap();
        assert!(!click.default_prevented());
        button.dyn_ref::<web_sys::HtmlElement>().unwrap().click();

        // With the section present the listener takes over the click
        let section = document.create_element("section").unwrap();
        section.set_id("contact");
        body.append_child(&section).unwrap();
        let click = cancelable_click();
        button.dispatch_event(&click).unwrap();
        assert!(click.default_prevented());
        button.dyn_ref::<web_sys::HtmlElement>().unwrap().click();

        // Unbound links no longer intercept
        drop(links);
        let click = cancelable_click();
        button.dispatch_event(&click).unwrap();
        assert!(!click.default_prevented());

        section.remove();
        holder.remove();
    }
}
