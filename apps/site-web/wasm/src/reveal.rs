//! Entrance animations driven by `IntersectionObserver`

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use site_core::reveal::RevealTracker;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

/// Class that starts the CSS transition
pub const REVEALED_CLASS: &str = "is-revealed";

/// Root class that enables the hidden starting state. Without it every
/// `data-reveal` element renders fully visible.
pub const READY_CLASS: &str = "reveal-ready";

/// Share of an element that must be visible before it animates
const VISIBILITY_THRESHOLD: f64 = 0.15;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches every `data-reveal` element for the lifetime of one mount
pub struct RevealObserver {
    root: Option<Element>,
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker>>,
    _callback: ObserverCallback,
}

impl RevealObserver {
    pub fn observe(document: &Document) -> Result<Self, JsValue> {
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let seen = Rc::clone(&tracker);

        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let key = target.get_attribute("data-reveal-key").unwrap_or_default();
                if seen.borrow_mut().mark_visible(&key) {
                    if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                        dom::warn(&format!("Failed to reveal element: {:?}", err));
                    }
                }
                observer.unobserve(&target);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let targets: Vec<Element> = dom::query_document(document, "[data-reveal]")?;
        for el in &targets {
            observer.observe(el);
        }

        // Only hide content once the observer that reveals it is running
        let root = document.document_element();
        if let Some(root) = &root {
            root.class_list().add_1(READY_CLASS)?;
        }

        Ok(Self {
            root,
            observer,
            tracker,
            _callback: callback,
        })
    }

    pub fn revealed_count(&self) -> usize {
        self.tracker.borrow().revealed_count()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        if let Some(root) = &self.root {
            let _ = root.class_list().remove_1(READY_CLASS);
        }
    }
}
