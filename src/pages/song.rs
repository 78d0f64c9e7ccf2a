use dioxus::prelude::*;
use valentine_core::ScreenId;

use crate::components::{AudioPlayerCard, ScreenFrame};

#[component]
pub fn Song() -> Element {
    rsx! {
        ScreenFrame { id: ScreenId::SONG,
            h1 { class: "title", "This one's for you 🎶" }
            AudioPlayerCard {}
        }
    }
}
