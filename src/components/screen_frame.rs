//! Full-page container shared by every screen.

use dioxus::prelude::*;
use valentine_core::ScreenId;
use valentine_ui::{Button, ButtonVariant};

use super::GifStrip;
use crate::context::use_show;

/// Wraps a screen's content with its fade class, its GIF strip and, when
/// navigation has a link from this screen, a continue button.
#[component]
pub fn ScreenFrame(id: ScreenId, children: Element) -> Element {
    let handle = use_show();
    let signal = handle.show();
    let show = signal.read();
    let class = show.deck().phase(id).unwrap_or_default().class();
    let has_link = show.link_target(id).is_some();
    let dom_id = id.dom_id();

    rsx! {
        section { id: "{dom_id}", class: "{class}",
            GifStrip { screen: id }
            {children}
            if has_link {
                Button {
                    variant: ButtonVariant::Continue,
                    onclick: move |_| {
                        handle.act(|show| show.follow_link());
                    },
                    "Continue 💌"
                }
            }
        }
    }
}
