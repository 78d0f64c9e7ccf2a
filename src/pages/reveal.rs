use dioxus::prelude::*;
use valentine_core::ScreenId;

use crate::components::ScreenFrame;

#[component]
pub fn Reveal() -> Element {
    rsx! {
        ScreenFrame { id: ScreenId::REVEAL,
            h1 { class: "title", "Unlocked! 💖" }
            p { class: "subtitle", "You got it. Now, a few things I wanted to show you..." }
        }
    }
}
