//! Marks the navigation link that points at the current page.

use crate::shared::config::SiteConfig;
use crate::shared::dom::UiElement;

/// Final segment of a location path, or `home_page` when the path ends in `/`.
pub fn current_page(pathname: &str, home_page: &str) -> String {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => home_page.to_string(),
    }
}

pub fn is_current_link(href: Option<&str>, current: &str, home_page: &str) -> bool {
    match href {
        Some(href) => href == current || (current.is_empty() && href == home_page),
        None => false,
    }
}

/// Clears the active class on every link and sets it on those matching the
/// current page. Returns how many links were marked.
pub fn highlight_active_links<E: UiElement>(links: &[E], pathname: &str, config: &SiteConfig) -> usize {
    let current = current_page(pathname, &config.home_page);
    let mut marked = 0;

    for link in links {
        link.remove_class(&config.active_class);
        if is_current_link(link.attribute("href").as_deref(), &current, &config.home_page) {
            link.add_class(&config.active_class);
            marked += 1;
        }
    }
    marked
}
