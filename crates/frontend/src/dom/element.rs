use catalog_contracts::shared::dom::UiElement;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

#[derive(Clone, Debug)]
pub struct DomElement(pub Element);

impl From<Element> for DomElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl UiElement for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0
            .class_list()
            .toggle(class)
            .unwrap_or_else(|_| self.has_class(class))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_style(&self, property: &str, value: &str) {
        // SVG and other non-HTML elements carry no inline style here
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }
}
