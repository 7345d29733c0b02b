//! DOM lookup helpers

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Every element under `root` matching `selector`
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    collect(root.query_selector_all(selector)?)
}

/// Every element in the document matching `selector`
pub fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    collect(document.query_selector_all(selector)?)
}

fn collect(nodes: web_sys::NodeList) -> Result<Vec<Element>, JsValue> {
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
