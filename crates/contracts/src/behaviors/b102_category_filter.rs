//! Product grid filtering by category tab.

use crate::shared::config::{FadeInConfig, SiteConfig};
use crate::shared::dom::UiElement;
use crate::shared::styles::fade_in_animation;

pub struct CategoryFilter<E> {
    tabs: Vec<E>,
    cards: Vec<E>,
    active_class: String,
    category_attribute: String,
    all_category: String,
    fade_in: FadeInConfig,
}

impl<E: UiElement> CategoryFilter<E> {
    pub fn new(tabs: Vec<E>, cards: Vec<E>, config: &SiteConfig) -> Self {
        Self {
            tabs,
            cards,
            active_class: config.active_class.clone(),
            category_attribute: config.category_attribute.clone(),
            all_category: config.all_category.clone(),
            fade_in: config.fade_in.clone(),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Tab handler: marks tab `index` active and re-filters every card.
    ///
    /// Returns the number of visible cards, or `None` if there is no such tab.
    pub fn select(&self, index: usize) -> Option<usize> {
        let selected_tab = self.tabs.get(index)?;

        for tab in &self.tabs {
            tab.remove_class(&self.active_class);
        }
        selected_tab.add_class(&self.active_class);

        let selected = selected_tab.attribute(&self.category_attribute);
        let animation = fade_in_animation(&self.fade_in);
        let mut visible = 0;

        for card in &self.cards {
            let card_category = card.attribute(&self.category_attribute);
            if category_matches(selected.as_deref(), card_category.as_deref(), &self.all_category) {
                card.set_style("display", "block");
                card.set_style("animation", &animation);
                visible += 1;
            } else {
                card.set_style("display", "none");
            }
        }

        Some(visible)
    }
}

/// Whether a card belongs to the selected category. A missing attribute on the
/// tab only matches cards that lack it too.
pub fn category_matches(selected: Option<&str>, card: Option<&str>, all_category: &str) -> bool {
    selected == Some(all_category) || selected == card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::mock::MockElement;

    fn tab(category: &str) -> MockElement {
        MockElement::with_attribute("data-category", category)
    }

    fn fixture() -> (CategoryFilter<MockElement>, Vec<MockElement>, Vec<MockElement>) {
        let tabs = vec![tab("all").with_class("active"), tab("rackets"), tab("balls")];
        let cards = vec![tab("rackets"), tab("balls"), tab("rackets"), MockElement::default()];
        let filter = CategoryFilter::new(tabs.clone(), cards.clone(), &SiteConfig::default());
        (filter, tabs, cards)
    }

    fn visible(cards: &[MockElement]) -> Vec<bool> {
        cards
            .iter()
            .map(|card| card.style("display").as_deref() == Some("block"))
            .collect()
    }

    #[test]
    fn test_exactly_one_active_tab() {
        let (filter, tabs, _) = fixture();

        for index in [1, 2, 0, 2, 2] {
            filter.select(index).unwrap();
            let active: Vec<usize> = tabs
                .iter()
                .enumerate()
                .filter(|(_, t)| t.has_class("active"))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(active, vec![index]);
        }
    }

    #[test]
    fn test_filter_by_category() {
        let (filter, _, cards) = fixture();

        assert_eq!(filter.select(1), Some(2));
        assert_eq!(visible(&cards), vec![true, false, true, false]);
        assert_eq!(cards[1].style("display").as_deref(), Some("none"));
        assert_eq!(cards[0].style("animation").as_deref(), Some("fadeIn 0.5s ease"));

        assert_eq!(filter.select(2), Some(1));
        assert_eq!(visible(&cards), vec![false, true, false, false]);
    }

    #[test]
    fn test_all_shows_every_card() {
        let (filter, _, cards) = fixture();
        filter.select(2);

        assert_eq!(filter.select(0), Some(4));
        assert_eq!(visible(&cards), vec![true; 4]);
    }

    #[test]
    fn test_unknown_tab_is_noop() {
        let (filter, tabs, cards) = fixture();

        assert_eq!(filter.select(9), None);
        assert!(tabs[0].has_class("active"));
        assert!(cards.iter().all(|card| card.style("display").is_none()));
    }

    #[test]
    fn test_category_matches() {
        assert!(category_matches(Some("all"), Some("balls"), "all"));
        assert!(category_matches(Some("all"), None, "all"));
        assert!(category_matches(Some("balls"), Some("balls"), "all"));
        assert!(!category_matches(Some("balls"), Some("rackets"), "all"));
        assert!(category_matches(None, None, "all"));
        assert!(!category_matches(None, Some("balls"), "all"));
    }
}
