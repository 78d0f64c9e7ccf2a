//! Memories screen: up to eight photos arranged as a heart.

use dioxus::prelude::*;
use valentine_core::ScreenId;

use crate::components::{MemoryHeart, ScreenFrame};

#[component]
pub fn Memories() -> Element {
    rsx! {
        ScreenFrame { id: ScreenId::MEMORIES,
            h1 { class: "title", "Our Memories" }
            MemoryHeart {}
            p { class: "subtitle", "Every one of these is a favourite." }
        }
    }
}
