//! Photo collage scattered around the finale screen.

use dioxus::prelude::*;

use crate::context::use_show;

/// Each photo sits in its own positioned frame; a photo that fails to
/// load hides its whole frame.
#[component]
pub fn ScatteredPhotos() -> Element {
    let handle = use_show();
    let signal = handle.show();
    let photos = signal.read().collage().photos().to_vec();

    rsx! {
        div { id: "scatteredPhotos", class: "scattered-photos",
            {photos.into_iter().enumerate().map(|(position, photo)| {
                let hidden = if photo.hidden { " display: none;" } else { "" };
                let style = format!(
                    "{} animation-delay: {}s;{}",
                    photo.slot.style(),
                    photo.delay.as_secs_f32(),
                    hidden
                );
                rsx! {
                    div { key: "{position}", class: "scattered-photo", style: "{style}",
                        img {
                            src: "{photo.path}",
                            alt: "Memory",
                            onerror: move |_| {
                                handle.act(|show| show.report_collage_failed(position));
                            },
                        }
                    }
                }
            })}
        }
    }
}
