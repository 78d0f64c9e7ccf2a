//! Unlock screen: the question gate in front of everything else.

use dioxus::prelude::*;
use valentine_core::{ScreenId, Verdict};
use valentine_ui::{Button, ButtonVariant, HintLine};

use crate::components::ScreenFrame;
use crate::context::use_show;

/// Puts the cursor back in the answer box with its text selected.
const REFOCUS_SCRIPT: &str = r#"
    const input = document.getElementById('answerInput');
    if (input) { input.focus(); input.select(); }
"#;

#[component]
pub fn Unlock() -> Element {
    let handle = use_show();
    let mut answer = use_signal(String::new);

    let signal = handle.show();
    let show = signal.read();
    let question = show.config().question.clone();
    let hint = show.gate().hint().cloned();
    let unlocked = show.gate().is_unlocked();

    let submit = move || {
        let text = answer.read().clone();
        let verdict = handle.act(|show| show.submit_answer(&text));
        if verdict == Some(Verdict::Incorrect) {
            let _ = document::eval(REFOCUS_SCRIPT);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            evt.prevent_default();
            submit();
        }
    };

    rsx! {
        ScreenFrame { id: ScreenId::UNLOCK,
            h1 { class: "title", "A little question first 💌" }
            div { class: "card",
                p { class: "question", "{question}" }
                div { class: "answer-row",
                    input {
                        id: "answerInput",
                        r#type: "text",
                        autocomplete: "off",
                        placeholder: "Your answer...",
                        value: "{answer}",
                        disabled: unlocked,
                        oninput: move |e| answer.set(e.value()),
                        onkeydown: on_keydown,
                    }
                    Button {
                        variant: ButtonVariant::Unlock,
                        id: "unlockBtn".to_string(),
                        disabled: unlocked,
                        onclick: move |_| submit(),
                        "Unlock 🔓"
                    }
                }
                HintLine { hint }
            }
        }
    }
}
