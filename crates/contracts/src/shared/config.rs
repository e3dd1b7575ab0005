//! Site configuration: selectors, class names and animation constants.
//!
//! Every field has a default matching the stock storefront markup, so a page
//! only needs to supply the values it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config must be a JSON object, got {0}")]
    NotAnObject(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub menu_button_selector: String,
    pub nav_links_selector: String,
    pub category_tab_selector: String,
    pub product_card_selector: String,
    pub anchor_selector: String,
    /// Class marking an open menu, the selected tab and the current nav link.
    pub active_class: String,
    pub category_attribute: String,
    /// Category value that matches every card.
    pub all_category: String,
    /// Page name used when the location path ends with `/`.
    pub home_page: String,
    pub menu_bar_offset_px: i32,
    pub fade_in: FadeInConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_button_selector: ".mobile-menu-btn".to_string(),
            nav_links_selector: ".nav-links".to_string(),
            category_tab_selector: ".category-tab".to_string(),
            product_card_selector: ".product-card".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            active_class: "active".to_string(),
            category_attribute: "data-category".to_string(),
            all_category: "all".to_string(),
            home_page: "index.html".to_string(),
            menu_bar_offset_px: 8,
            fade_in: FadeInConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON object. Missing keys keep their defaults, unknown keys are ignored.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject(json_kind(&value).to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Selector for the links inside the navigation container.
    pub fn nav_link_selector(&self) -> String {
        format!("{} a", self.nav_links_selector)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// The card fade-in keyframes and how they are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub name: String,
    pub duration_secs: f64,
    pub easing: String,
    /// Starting downward offset of a card, in pixels.
    pub offset_px: i32,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            name: "fadeIn".to_string(),
            duration_secs: 0.5,
            easing: "ease".to_string(),
            offset_px: 10,
        }
    }
}
