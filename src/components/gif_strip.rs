//! Per-screen GIF container.

use dioxus::prelude::*;
use valentine_core::ScreenId;

use crate::context::use_show;

/// Renders a screen's GIFs with the classes the animator assigns.
///
/// Failed GIFs stay in the DOM with `display: none`, leaving a gap.
#[component]
pub fn GifStrip(screen: ScreenId) -> Element {
    let handle = use_show();
    let signal = handle.show();
    let show = signal.read();
    if !show.animator().has_container(screen) {
        return rsx! {};
    }
    let items = show.animator().items(screen).to_vec();
    let screen_number = screen.get();

    rsx! {
        div { class: "gif-container", "data-screen": "{screen_number}",
            {items.into_iter().map(|item| {
                let index = item.index;
                let class = item.visibility.class();
                let style = if item.failed { "display: none;" } else { "" };
                rsx! {
                    img {
                        key: "{index}",
                        class: "{class}",
                        src: "{item.path}",
                        alt: "",
                        style: "{style}",
                        "data-index": "{index}",
                        onerror: move |_| handle.act(|show| show.report_gif_failed(screen, index)),
                    }
                }
            })}
        }
    }
}
