//! Same-page anchor links scroll smoothly instead of jumping.

/// Where the page can look up and scroll to fragment targets.
pub trait ScrollHost {
    type Target;

    fn find_by_id(&self, id: &str) -> Option<Self::Target>;
    /// Smoothly aligns the target's top with the top of the viewport.
    fn scroll_to(&self, target: &Self::Target);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Bare `#` (or not a fragment link): the browser handles navigation.
    PassThrough,
    /// Default navigation suppressed and the target scrolled into view.
    Scrolled(String),
    /// Default navigation suppressed, no element carries the fragment id.
    Missing(String),
}

impl AnchorOutcome {
    /// Whether the click's default action must be prevented.
    pub fn intercepts(&self) -> bool {
        !matches!(self, AnchorOutcome::PassThrough)
    }
}

/// Fragment of a same-page link, without the leading `#`. `None` for `#` itself.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

/// Ids to try for a fragment: as written, then percent-decoded if that differs.
pub fn candidate_ids(fragment: &str) -> Vec<String> {
    let mut ids = vec![fragment.to_string()];
    if let Ok(decoded) = urlencoding::decode(fragment) {
        if decoded != fragment {
            ids.push(decoded.into_owned());
        }
    }
    ids
}

/// Anchor click handler.
pub fn handle_anchor<H: ScrollHost>(host: &H, href: Option<&str>) -> AnchorOutcome {
    let Some(fragment) = href.and_then(fragment_of) else {
        return AnchorOutcome::PassThrough;
    };

    for id in candidate_ids(fragment) {
        if let Some(target) = host.find_by_id(&id) {
            host.scroll_to(&target);
            return AnchorOutcome::Scrolled(id);
        }
    }
    AnchorOutcome::Missing(fragment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new(ids: Vec<&'static str>) -> Self {
            Self {
                ids,
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollHost for FakePage {
        type Target = String;

        fn find_by_id(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|known| **known == id).map(|id| id.to_string())
        }

        fn scroll_to(&self, target: &String) {
            self.scrolled.borrow_mut().push(target.clone());
        }
    }

    #[test]
    fn test_bare_hash_passes_through() {
        let page = FakePage::new(vec!["products"]);

        let outcome = handle_anchor(&page, Some("#"));
        assert_eq!(outcome, AnchorOutcome::PassThrough);
        assert!(!outcome.intercepts());
        assert!(handle_anchor(&page, None) == AnchorOutcome::PassThrough);
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_scrolls_to_existing_target() {
        let page = FakePage::new(vec!["products"]);

        let outcome = handle_anchor(&page, Some("#products"));
        assert_eq!(outcome, AnchorOutcome::Scrolled("products".to_string()));
        assert!(outcome.intercepts());
        assert_eq!(*page.scrolled.borrow(), vec!["products".to_string()]);
    }

    #[test]
    fn test_missing_target_intercepts_without_scroll() {
        let page = FakePage::new(vec!["products"]);

        let outcome = handle_anchor(&page, Some("#section-1"));
        assert_eq!(outcome, AnchorOutcome::Missing("section-1".to_string()));
        assert!(outcome.intercepts());
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_percent_encoded_fragment() {
        let page = FakePage::new(vec!["球拍"]);

        let outcome = handle_anchor(&page, Some("#%E7%90%83%E6%8B%8D"));
        assert_eq!(outcome, AnchorOutcome::Scrolled("球拍".to_string()));
        assert_eq!(candidate_ids("plain"), vec!["plain".to_string()]);
    }
}
