//! Song player card.
//!
//! The `<audio>` element does the actual playback; the show keeps the
//! play/pause state, progress and fallback text. Element time is read
//! back through a small eval on every `timeupdate`.

use dioxus::prelude::*;
use valentine_core::PlaybackState;
use valentine_ui::{Button, ButtonVariant};

use crate::context::use_show;

const AUDIO_ELEMENT_ID: &str = "valentineAudio";

const PLAY_SCRIPT: &str =
    "document.getElementById('valentineAudio')?.play().catch(() => {});";
const PAUSE_SCRIPT: &str = "document.getElementById('valentineAudio')?.pause();";
const TIME_SCRIPT: &str = r#"
    const audio = document.getElementById('valentineAudio');
    dioxus.send([audio ? audio.currentTime : 0, audio ? audio.duration : 0]);
"#;

#[component]
pub fn AudioPlayerCard() -> Element {
    let handle = use_show();
    let signal = handle.show();
    let show = signal.read();
    let player = show.audio();
    let playing = player.is_playing();
    let title = player.title().to_string();
    let notice = player.notice().map(str::to_string);
    let source = player.source().map(str::to_string);
    let progress = player.progress();

    let toggle = move |_: ()| {
        let script = match handle.act(|show| show.toggle_playback()) {
            PlaybackState::Playing => PLAY_SCRIPT,
            PlaybackState::Paused => PAUSE_SCRIPT,
        };
        let _ = document::eval(script);
    };

    rsx! {
        div { class: "audio-player",
            if let Some(src) = source {
                audio {
                    id: AUDIO_ELEMENT_ID,
                    src: "{src}",
                    preload: "auto",
                    onerror: move |_| handle.act(|show| show.report_audio_failed()),
                    onended: move |_| handle.act(|show| show.audio_ended()),
                    ontimeupdate: move |_| async move {
                        let mut eval = document::eval(TIME_SCRIPT);
                        match eval.recv::<(f64, f64)>().await {
                            Ok((current, duration)) => {
                                handle.act(|show| show.audio_time_update(current, duration));
                            }
                            Err(e) => tracing::debug!("Audio time unavailable: {:?}", e),
                        }
                    },
                }
            }
            div { class: "audio-info",
                p { class: "audio-title", "{title}" }
                if let Some(notice) = notice {
                    p { class: "audio-notice", "{notice}" }
                }
            }
            Button {
                variant: ButtonVariant::Round,
                id: "playPauseBtn".to_string(),
                aria_label: if playing { "Pause".to_string() } else { "Play".to_string() },
                onclick: toggle,
                span { class: if playing { "play-icon hidden" } else { "play-icon" }, "▶" }
                span { class: if playing { "pause-icon" } else { "pause-icon hidden" }, "⏸" }
            }
            div { class: "progress-track",
                div { id: "progress", class: "progress-bar", style: "width: {progress}%;" }
            }
        }
    }
}
