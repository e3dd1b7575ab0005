//! Minimal element surface the behaviors need.

/// A handle to a live element. Handles are cheap clones of a shared node, so
/// mutation goes through `&self` the same way DOM bindings do.
pub trait UiElement {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flips `class` and returns whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    /// Sets an inline style property. An empty `value` clears it.
    fn set_style(&self, property: &str, value: &str);
}
