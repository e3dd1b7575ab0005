use catalog_contracts::shared::config::FadeInConfig;
use catalog_contracts::shared::styles::fade_in_keyframes;
use web_sys::Document;

/// Append the card fade-in `@keyframes` to `<head>`.
///
/// Every call appends a new `<style>`; nothing checks for an earlier one.
pub fn inject_fade_in_keyframes(document: &Document, fade: &FadeInConfig) -> bool {
    let Some(head) = document.head() else {
        return false;
    };
    let Ok(style) = document.create_element("style") else {
        return false;
    };

    style.set_text_content(Some(&fade_in_keyframes(fade)));
    head.append_child(&style).is_ok()
}
