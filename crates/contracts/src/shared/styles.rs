//! CSS text generated for the card fade-in.

use super::config::FadeInConfig;

/// `@keyframes` rule injected into the page head.
pub fn fade_in_keyframes(fade: &FadeInConfig) -> String {
    format!(
        "@keyframes {name} {{\n    from {{\n        opacity: 0;\n        transform: translateY({offset}px);\n    }}\n    to {{\n        opacity: 1;\n        transform: translateY(0);\n    }}\n}}\n",
        name = fade.name,
        offset = fade.offset_px,
    )
}

/// Value for a card's inline `animation` property.
pub fn fade_in_animation(fade: &FadeInConfig) -> String {
    format!("{} {}s {}", fade.name, fade.duration_secs, fade.easing)
}
