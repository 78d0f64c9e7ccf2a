//! Heart-shaped grid of memory photos.

use dioxus::prelude::*;
use valentine_ui::Placeholder;

use crate::context::use_show;

#[component]
pub fn MemoryHeart() -> Element {
    let handle = use_show();
    let signal = handle.show();
    let slots = signal.read().heart().slots().to_vec();

    rsx! {
        div { class: "heart",
            {slots.into_iter().enumerate().map(|(index, slot)| {
                let delay = slot.delay.as_secs_f32();
                let photo = slot.photo().map(str::to_string);
                rsx! {
                    div {
                        key: "{index}",
                        class: "memory-item",
                        style: "animation-delay: {delay}s;",
                        if let Some(path) = photo {
                            img {
                                src: "{path}",
                                alt: "Memory {index}",
                                onerror: move |_| {
                                    handle.act(|show| show.report_photo_failed(index));
                                },
                            }
                        } else {
                            Placeholder {}
                        }
                    }
                }
            })}
        }
    }
}
