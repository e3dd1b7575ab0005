//! Page-supplied configuration.
//!
//! Sources, first found wins: the `window.catalogConfig` object, then a
//! `<script type="application/json" id="catalog-config">` block, then defaults.

use catalog_contracts::shared::config::SiteConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

const CONFIG_GLOBAL: &str = "catalogConfig";
const CONFIG_SCRIPT_ID: &str = "catalog-config";

pub fn load_config(window: &Window, document: &Document) -> SiteConfig {
    if let Some(config) = config_from_global(window) {
        log::debug!("config loaded from window.{}", CONFIG_GLOBAL);
        return config;
    }
    if let Some(config) = config_from_script(document) {
        log::debug!("config loaded from #{}", CONFIG_SCRIPT_ID);
        return config;
    }
    SiteConfig::default()
}

fn config_from_global(window: &Window) -> Option<SiteConfig> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    match serde_wasm_bindgen::from_value::<SiteConfig>(value) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("ignoring window.{}: {}", CONFIG_GLOBAL, e);
            None
        }
    }
}

fn config_from_script(document: &Document) -> Option<SiteConfig> {
    let text = document.get_element_by_id(CONFIG_SCRIPT_ID)?.text_content()?;

    match SiteConfig::from_json(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("ignoring #{}: {}", CONFIG_SCRIPT_ID, e);
            None
        }
    }
}
