//! Placeholder glyph for missing photos.

use dioxus::prelude::*;
use valentine_core::PLACEHOLDER_GLYPH;

/// Shown in a memory slot with no photo or a photo that failed to load.
#[component]
pub fn Placeholder() -> Element {
    rsx! {
        div { class: "memory-placeholder", "aria-hidden": "true", "{PLACEHOLDER_GLYPH}" }
    }
}
