//! Button Components
//!
//! - Unlock: the answer submit button on the first screen
//! - Continue: forward navigation on screens with a configured link
//! - Round: the circular play/pause control

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled rose button next to the answer input
    #[default]
    Unlock,
    /// Outlined "continue" link button
    Continue,
    /// Circular media control
    Round,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Unlock => "btn-unlock",
            ButtonVariant::Continue => "btn-continue",
            ButtonVariant::Round => "btn-round",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Accessible label for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Continue,
///         onclick: move |_| show.act(|s| s.follow_link()),
///         "Continue"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.variant.class();
    let id = props.id.clone().unwrap_or_default();
    let label = props.aria_label.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{class}",
            id: "{id}",
            r#type: "button",
            "aria-label": "{label}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
