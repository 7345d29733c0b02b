//! Scroll-aware navigation bar bound to the DOM
//!
//! [`WindowScroll`] delivers `window` scroll events through the shared
//! [`ScrollSource`] contract, so the bar's listener is removed from `window`
//! when its subscription guard drops.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use site_core::nav::NavStyle;
use site_core::{
    MountedNavBar, NavBar, NavState, ScrollHandler, ScrollSource, SubscriptionId,
    SCROLL_THRESHOLD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::dom;

/// `window` scroll events as a [`ScrollSource`]
#[derive(Clone)]
pub struct WindowScroll {
    window: Window,
    next_id: Rc<Cell<u64>>,
    listeners: Rc<RefCell<HashMap<SubscriptionId, Closure<dyn FnMut()>>>>,
}

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            next_id: Rc::new(Cell::new(0)),
            listeners: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollSource for WindowScroll {
    fn subscribe(&self, mut handler: ScrollHandler) -> SubscriptionId {
        let id = SubscriptionId::from_raw(self.next_id.get());
        self.next_id.set(id.raw() + 1);

        let window = self.window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            handler(window.scroll_y().unwrap_or(0.0));
        });
        match self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            // Only attached listeners are tracked, so `listener_count` stays truthful
            Ok(()) => {
                self.listeners.borrow_mut().insert(id, closure);
            }
            Err(err) => dom::warn(&format!("Failed to attach scroll listener: {:?}", err)),
        }
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Some(closure) = self.listeners.borrow_mut().remove(&id) else {
            return false;
        };
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            dom::warn(&format!("Failed to detach scroll listener: {:?}", err));
        }
        true
    }
}

/// Fail unless `source` has a live `window` listener
fn ensure_attached(source: &WindowScroll) -> Result<(), JsValue> {
    if source.listener_count() == 0 {
        return Err(JsValue::from_str("Failed to attach scroll listener"));
    }
    Ok(())
}

fn swap_class(el: &Element, off: &str, on: &str) -> Result<(), JsValue> {
    let classes = el.class_list();
    classes.remove_1(off)?;
    classes.add_1(on)
}

/// Apply the classes of `state` to the nav element and its children
pub fn apply_style(nav: &Element, state: NavState) -> Result<(), JsValue> {
    let on: NavStyle = state.style();
    let off: NavStyle = state.other().style();

    swap_class(nav, off.container, on.container)?;
    nav.set_attribute("data-nav-state", state.as_str())?;
    for el in dom::query_all(nav, ".nav__brand")? {
        swap_class(&el, off.brand, on.brand)?;
    }
    for el in dom::query_all(nav, ".nav__link")? {
        swap_class(&el, off.link, on.link)?;
    }
    for el in dom::query_all(nav, "[data-nav-cta]")? {
        swap_class(&el, off.button.class(), on.button.class())?;
    }
    Ok(())
}

/// State exported to JavaScript
#[derive(Serialize)]
struct NavSnapshot {
    state: NavState,
    solid: bool,
    threshold: f64,
    mounted: bool,
}

/// A mounted navigation bar. Call `unmount()` (or `free()`) to detach it.
#[wasm_bindgen]
pub struct NavHandle {
    mounted: Option<MountedNavBar<WindowScroll>>,
    last_state: NavState,
}

impl NavHandle {
    /// Mount the bar on `nav` and sync it with the current scroll position
    ///
    /// # Errors
    ///
    /// Returns an error if the scroll listener could not be attached.
    pub fn mount(window: &Window, nav: Element) -> Result<Self, JsValue> {
        let source = WindowScroll::new(window.clone());
        let attached = source.clone();
        let styled = nav.clone();
        let mut bar = NavBar::new().with_observer(move |transition| {
            if let Err(err) = apply_style(&styled, transition.to) {
                dom::warn(&format!("Failed to restyle navigation: {:?}", err));
            }
        });
        bar.on_scroll(source.offset());

        let mounted = bar.mount(source);
        ensure_attached(&attached)?;

        Ok(Self {
            mounted: Some(mounted),
            last_state: NavState::default(),
        })
    }

    fn current(&self) -> NavState {
        self.mounted
            .as_ref()
            .map(MountedNavBar::state)
            .unwrap_or(self.last_state)
    }
}

#[wasm_bindgen]
impl NavHandle {
    /// "transparent" or "solid"
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.current().as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(js_name = snapshot)]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.current();
        let snapshot = NavSnapshot {
            state,
            solid: state.is_solid(),
            threshold: SCROLL_THRESHOLD,
            mounted: self.is_mounted(),
        };
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Detach the scroll listener. Further scrolling has no effect.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            self.last_state = mounted.unmount();
        }
    }
}

// WASM-specific tests that run in a browser environment
#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use site_core::render::home::navigation;
    use site_core::SiteContent;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn nav_element() -> Element {
        let document = dom::document(&dom::window().unwrap()).unwrap();
        let content = SiteContent::default();
        let holder = document.create_element("div").unwrap();
        holder.set_inner_html(&navigation(&content.nav, &content.firm));
        document.body().unwrap().append_child(&holder).unwrap();
        holder.first_element_child().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_apply_style_swaps_classes() {
        let nav = nav_element();
        apply_style(&nav, NavState::Solid).unwrap();
        assert!(nav.class_list().contains("nav--solid"));
        assert!(!nav.class_list().contains("nav--transparent"));
        assert_eq!(nav.get_attribute("data-nav-state").as_deref(), Some("solid"));

        let cta = nav.query_selector("[data-nav-cta]").unwrap().unwrap();
        assert!(cta.class_list().contains("btn--default"));

        apply_style(&nav, NavState::Transparent).unwrap();
        assert!(nav.class_list().contains("nav--transparent"));
        assert!(cta.class_list().contains("btn--secondary"));
    }

    #[wasm_bindgen_test]
    fn test_window_scroll_detaches_on_unsubscribe() {
        let source = WindowScroll::new(dom::window().unwrap());
        let id = source.subscribe(Box::new(|_| {}));
        assert_eq!(source.listener_count(), 1);
        assert!(source.unsubscribe(id));
        assert_eq!(source.listener_count(), 0);
        assert!(!source.unsubscribe(id));
    }

    #[wasm_bindgen_test]
    fn test_unattached_source_is_rejected() {
        let source = WindowScroll::new(dom::window().unwrap());
        assert!(ensure_attached(&source).is_err());
        let id = source.subscribe(Box::new(|_| {}));
        assert!(ensure_attached(&source).is_ok());
        source.unsubscribe(id);
    }

    fn scroll_window_to(window: &Window, y: f64) {
        window.scroll_to_with_x_and_y(0.0, y);
        let event = web_sys::Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_window_scroll_event_restyles_until_unmount() {
        let window = dom::window().unwrap();
        let document = dom::document(&window).unwrap();
        let spacer = document.create_element("div").unwrap();
        spacer.set_attribute("style", "height: 5000px").unwrap();
        document.body().unwrap().append_child(&spacer).unwrap();
        scroll_window_to(&window, 0.0);

        let nav = nav_element();
        let mut handle = NavHandle::mount(&window, nav.clone()).unwrap();
        assert_eq!(handle.state(), "transparent");

        scroll_window_to(&window, 200.0);
        assert_eq!(handle.state(), "solid");
        assert!(nav.class_list().contains("nav--solid"));
        assert!(!nav.class_list().contains("nav--transparent"));

        scroll_window_to(&window, 0.0);
        assert_eq!(handle.state(), "transparent");
        assert!(nav.class_list().contains("nav--transparent"));

        handle.unmount();
        scroll_window_to(&window, 200.0);
        assert_eq!(handle.state(), "transparent");
        assert!(nav.class_list().contains("nav--transparent"));
        assert!(!nav.class_list().contains("nav--solid"));

        scroll_window_to(&window, 0.0);
        spacer.remove();
    }

    #[wasm_bindgen_test]
    fn test_unmount_keeps_last_state() {
        let window = dom::window().unwrap();
        let mut handle = NavHandle::mount(&window, nav_element()).unwrap();
        assert!(handle.is_mounted());
        handle.unmount();
        assert!(!handle.is_mounted());
        assert_eq!(handle.state(), "transparent");
    }
}
