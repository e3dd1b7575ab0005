//! Wires the storefront behaviors to the live document.
//!
//! The document is queried once, in [`PageController::from_document`]; the
//! four installers only attach listeners to the elements found then. Each one
//! is independent and silently skips when its elements are missing.

use crate::dom::{self, DocumentScrollHost, DomElement};
use catalog_contracts::behaviors::b101_mobile_menu::MobileMenu;
use catalog_contracts::behaviors::b102_category_filter::CategoryFilter;
use catalog_contracts::behaviors::b103_smooth_scroll::handle_anchor;
use catalog_contracts::behaviors::b104_active_nav::highlight_active_links;
use catalog_contracts::shared::config::SiteConfig;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

pub struct PageController {
    document: Document,
    config: Rc<SiteConfig>,
    menu_button: Option<Element>,
    nav_links: Option<Element>,
    nav_link_items: Vec<Element>,
    category_tabs: Vec<Element>,
    product_cards: Vec<Element>,
    anchors: Vec<Element>,
    pathname: String,
}

impl PageController {
    pub fn from_document(document: &Document, config: Rc<SiteConfig>) -> Self {
        let query_one = |selector: &str| document.query_selector(selector).ok().flatten();
        let query_all = |selector: &str| {
            document
                .query_selector_all(selector)
                .map(dom::elements)
                .unwrap_or_default()
        };

        let pathname = document
            .location()
            .and_then(|location| location.pathname().ok())
            .unwrap_or_default();

        Self {
            document: document.clone(),
            menu_button: query_one(&config.menu_button_selector),
            nav_links: query_one(&config.nav_links_selector),
            nav_link_items: query_all(&config.nav_link_selector()),
            category_tabs: query_all(&config.category_tab_selector),
            product_cards: query_all(&config.product_card_selector),
            anchors: query_all(&config.anchor_selector),
            pathname,
            config,
        }
    }

    /// Run all four initializers.
    pub fn install(self) {
        self.install_mobile_menu();
        self.install_category_filter();
        self.install_smooth_scroll();
        self.highlight_current_nav();
    }

    fn install_mobile_menu(&self) {
        let (Some(button), Some(nav_links)) = (&self.menu_button, &self.nav_links) else {
            log::debug!("mobile menu: button or links container missing, skipped");
            return;
        };

        let bars = dom::query_all(button, "span")
            .into_iter()
            .map(DomElement::from)
            .collect();
        let menu = Rc::new(MobileMenu::new(
            DomElement::from(nav_links.clone()),
            bars,
            &self.config,
        ));

        let menu_toggle = menu.clone();
        listen_click(button, move |_| {
            let open = menu_toggle.toggle();
            log::debug!("mobile menu {}", if open { "opened" } else { "closed" });
        });

        let links = dom::query_all(nav_links, "a");
        for link in &links {
            let menu_close = menu.clone();
            listen_click(link, move |_| menu_close.close());
        }
        log::debug!("mobile menu: wired, {} links close it", links.len());
    }

    fn install_category_filter(&self) {
        if self.category_tabs.is_empty() {
            return;
        }

        let filter = Rc::new(CategoryFilter::new(
            self.category_tabs.iter().cloned().map(DomElement::from).collect(),
            self.product_cards.iter().cloned().map(DomElement::from).collect(),
            &self.config,
        ));

        for (index, tab) in self.category_tabs.iter().enumerate() {
            let filter = filter.clone();
            listen_click(tab, move |_| {
                if let Some(visible) = filter.select(index) {
                    log::debug!("category tab {}: {} cards visible", index, visible);
                }
            });
        }
        log::debug!(
            "category filter: {} tabs, {} cards",
            filter.tab_count(),
            filter.card_count()
        );
    }

    fn install_smooth_scroll(&self) {
        let host = Rc::new(DocumentScrollHost::new(self.document.clone()));

        for anchor in &self.anchors {
            let host = host.clone();
            let anchor_for_click = anchor.clone();
            listen_click(anchor, move |event| {
                let href = anchor_for_click.get_attribute("href");
                let outcome = handle_anchor(&*host, href.as_deref());
                if outcome.intercepts() {
                    event.prevent_default();
                }
            });
        }
        log::debug!("smooth scroll: {} anchors", self.anchors.len());
    }

    fn highlight_current_nav(&self) {
        let links: Vec<DomElement> = self
            .nav_link_items
            .iter()
            .cloned()
            .map(DomElement::from)
            .collect();
        let marked = highlight_active_links(&links, &self.pathname, &self.config);
        log::debug!("active nav: {} of {} links marked", marked, links.len());
    }
}

/// Attach a click listener that lives as long as the page.
fn listen_click<F>(target: &Element, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
