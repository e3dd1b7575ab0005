//! `web-sys` side of the element abstraction.

mod element;
mod scroll;

pub use element::DomElement;
pub use scroll::DocumentScrollHost;

use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

/// Elements of a `querySelectorAll` result, in document order.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Runs `selector` under `root`; an invalid selector matches nothing.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(elements).unwrap_or_default()
}
