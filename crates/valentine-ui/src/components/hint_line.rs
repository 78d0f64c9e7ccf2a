//! Inline hint under the answer input.

use dioxus::prelude::*;
use valentine_core::Hint;

/// CSS classes for an optional hint. A missing hint stays in the layout,
/// hidden, so the input does not jump.
pub fn hint_class(hint: Option<&Hint>) -> String {
    match hint {
        Some(hint) => format!("hint {}", hint.kind.class()),
        None => "hint hidden".to_string(),
    }
}

/// Displays the current unlock hint, if any.
#[component]
pub fn HintLine(hint: Option<Hint>) -> Element {
    let class = hint_class(hint.as_ref());
    let message = hint.map(|h| h.message).unwrap_or_default();

    rsx! {
        p { id: "hint", class: "{class}", role: "status", "{message}" }
    }
}
