//! Collapsible mobile navigation.
//!
//! The open state lives only in the active class on the links container; the
//! three bars of the menu button morph into an "X" while it is open.

use crate::shared::config::SiteConfig;
use crate::shared::dom::UiElement;

pub struct MobileMenu<E> {
    nav_links: E,
    bars: Vec<E>,
    active_class: String,
    bar_offset_px: i32,
}

impl<E: UiElement> MobileMenu<E> {
    pub fn new(nav_links: E, bars: Vec<E>, config: &SiteConfig) -> Self {
        Self {
            nav_links,
            bars,
            active_class: config.active_class.clone(),
            bar_offset_px: config.menu_bar_offset_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.nav_links.has_class(&self.active_class)
    }

    /// Menu button handler. Returns the new open state.
    pub fn toggle(&self) -> bool {
        let open = self.nav_links.toggle_class(&self.active_class);
        self.apply_icon(open);
        open
    }

    /// Nav link handler: always leaves the menu closed.
    pub fn close(&self) {
        self.nav_links.remove_class(&self.active_class);
        self.apply_icon(false);
    }

    fn apply_icon(&self, open: bool) {
        for (index, bar) in self.bars.iter().enumerate() {
            bar.set_style("transform", &bar_transform(index, open, self.bar_offset_px));
        }
    }
}

/// Transform for bar `index` of the menu icon. Empty when closed.
pub fn bar_transform(index: usize, open: bool, offset_px: i32) -> String {
    if !open {
        return String::new();
    }
    match index {
        1 => "scaleX(0)".to_string(),
        0 => format!("rotate(45deg) translateY({}px)", offset_px),
        _ => format!("rotate(-45deg) translateY({}px)", -offset_px),
    }
}
