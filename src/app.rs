use std::time::{Duration, Instant};

use dioxus::prelude::*;
use valentine_core::{FsProbe, Show};

use crate::context::ShowHandle;
use crate::pages::{Finale, Memories, Reveal, Song, Unlock};
use crate::theme::GLOBAL_STYLES;
use crate::{get_asset_root, get_show_config};

/// Upper bound on how long the driver sleeps between timer checks.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Root application component.
///
/// Boots the show, provides it as context, and runs the loop that moves
/// the show clock forward as real time passes.
#[component]
pub fn App() -> Element {
    let started = use_hook(Instant::now);
    let show = use_signal(|| {
        let probe = FsProbe::new(get_asset_root());
        Show::boot(get_show_config(), &probe, &mut rand::rng())
    });
    let handle = use_context_provider(|| ShowHandle::new(show, started));

    use_future(move || async move {
        loop {
            let now = handle.elapsed();
            let wait = handle
                .show()
                .peek()
                .next_deadline()
                .map(|deadline| deadline.saturating_sub(now))
                .unwrap_or(IDLE_POLL)
                .min(IDLE_POLL);
            tokio::time::sleep(wait).await;

            let now = handle.elapsed();
            if handle.show().peek().has_due(now) {
                handle.act(|show| show.advance_to(now));
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "stage",
            Unlock {}
            Reveal {}
            Memories {}
            Song {}
            Finale {}
        }
    }
}
