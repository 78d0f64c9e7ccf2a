//! Finale: a sampled photo collage around the closing message.

use dioxus::prelude::*;
use valentine_core::ScreenId;

use crate::components::{ScatteredPhotos, ScreenFrame};

#[component]
pub fn Finale() -> Element {
    rsx! {
        ScreenFrame { id: ScreenId::FINALE,
            ScatteredPhotos {}
            div { class: "finale-message",
                h1 { class: "title", "Happy Valentine's Day 💕" }
                p { class: "subtitle", "Here's to many more memories together." }
            }
        }
    }
}
